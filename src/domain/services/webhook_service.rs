// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::WebhookMessage;
use async_trait::async_trait;
use thiserror::Error;

/// Webhook 发送错误类型
#[derive(Error, Debug)]
pub enum WebhookError {
    /// 请求失败
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// 对端返回非成功状态
    #[error("Webhook delivery failed with status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Webhook服务特质
///
/// 定义Webhook发送的核心逻辑
#[async_trait]
pub trait WebhookService: Send + Sync {
    /// 发送Webhook消息
    ///
    /// # 参数
    ///
    /// * `url` - Webhook地址
    /// * `message` - 消息内容
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 发送成功
    /// * `Err(WebhookError)` - 发送失败
    async fn send_webhook(&self, url: &str, message: &WebhookMessage) -> Result<(), WebhookError>;
}
