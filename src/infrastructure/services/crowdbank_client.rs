// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::fund::{Fund, FundSearchResponse};
use crate::domain::services::fund_source::{FetchError, FundSource};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use tracing::debug;

/// CrowdBank 站点根地址
pub const CROWDBANK_URL: &str = "https://crowdbank.jp";

/// 基金搜索接口路径，`status=21` 表示募集开始前
pub const SEARCH_PATH: &str = "/api/v1/funds/search?keyword=&region=&project=&status=21";

/// CrowdBank 基金搜索客户端
///
/// 每次运行只发起一次 GET 请求，不设置超时也不重试，
/// 失败由下一次调度重新执行。
pub struct CrowdBankClient {
    /// HTTP 客户端
    client: Client,
    /// 站点根地址
    base_url: String,
    /// User-Agent 请求头
    user_agent: String,
}

impl CrowdBankClient {
    /// 创建指向正式站点的客户端
    pub fn new(user_agent: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_base_url(CROWDBANK_URL, user_agent)
    }

    /// 创建指向指定站点的客户端
    ///
    /// # 参数
    ///
    /// * `base_url` - 站点根地址，不带末尾斜杠
    /// * `user_agent` - User-Agent 请求头
    pub fn with_base_url(
        base_url: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.into(),
            user_agent: user_agent.into(),
        })
    }

    /// 搜索接口完整地址
    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }
}

#[async_trait]
impl FundSource for CrowdBankClient {
    async fn search(&self) -> Result<Vec<Fund>, FetchError> {
        let url = self.search_url();
        debug!("Requesting {}", url);

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        let decoded: FundSearchResponse = serde_json::from_slice(&body)?;
        debug!(
            size = decoded.data.size,
            total = decoded.data.total,
            count = decoded.data.list.len(),
            "Fund search decoded"
        );

        Ok(decoded.data.list)
    }
}
