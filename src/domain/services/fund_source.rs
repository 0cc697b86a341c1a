// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::fund::Fund;
use async_trait::async_trait;
use thiserror::Error;

/// 基金获取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// 非 2xx 响应
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    /// 响应体不是预期的 JSON
    #[error("Failed to decode json: {0}")]
    Decode(#[from] serde_json::Error),
}

/// 基金来源特质
///
/// 定义一次性获取当前募集前基金列表的接口
#[async_trait]
pub trait FundSource: Send + Sync {
    /// 获取基金列表，顺序与接口返回一致
    async fn search(&self) -> Result<Vec<Fund>, FetchError>;
}
