// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::webhook::WebhookMessage;
use crate::domain::services::webhook_service::{WebhookError, WebhookService};
use async_trait::async_trait;

/// Slack Webhook服务实现
#[derive(Default)]
pub struct SlackWebhookServiceImpl {
    /// HTTP 客户端
    client: reqwest::Client,
}

impl SlackWebhookServiceImpl {
    /// 创建新的 Webhook 服务实现
    pub fn new() -> Self {
        let client = reqwest::Client::builder().build().unwrap_or_default();

        Self { client }
    }
}

#[async_trait]
impl WebhookService for SlackWebhookServiceImpl {
    async fn send_webhook(&self, url: &str, message: &WebhookMessage) -> Result<(), WebhookError> {
        let response = self.client.post(url).json(message).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(WebhookError::Status { status, body })
        }
    }
}
