// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::services::fund_source::FundSource;
use crate::domain::services::notification_service::{NotificationService, NotifyReport};
use crate::infrastructure::database::connection;
use crate::infrastructure::repositories::send_record_repo_impl::SendRecordRepositoryImpl;
use crate::infrastructure::services::crowdbank_client::{CrowdBankClient, CROWDBANK_URL};
use crate::infrastructure::services::webhook_service_impl::SlackWebhookServiceImpl;
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tracing::info;

/// 一次运行所需的全部上下文
///
/// 配置与站点地址显式传递给各阶段，不使用全局状态
pub struct AppContext {
    pub settings: Settings,
    /// 基金接口与详情链接共用的站点根地址
    pub base_url: String,
}

impl AppContext {
    pub fn new(settings: Settings) -> Self {
        Self::with_base_url(settings, CROWDBANK_URL)
    }

    pub fn with_base_url(settings: Settings, base_url: impl Into<String>) -> Self {
        Self {
            settings,
            base_url: base_url.into(),
        }
    }

    /// 执行一次完整流程：打开数据库 → 获取基金 → 逐个通知
    ///
    /// 数据库、请求或解码失败时直接返回错误，此时不会发出任何通知；
    /// 单个基金的推送或记录失败只写日志。
    pub async fn run(&self) -> anyhow::Result<NotifyReport> {
        let db = connection::create_pool(&self.settings.database)
            .await
            .context("Failed to open database")?;
        Migrator::up(&db, None)
            .await
            .context("Failed to migrate database")?;
        let db = Arc::new(db);
        info!("Database ready at {}", self.settings.database);

        let source = CrowdBankClient::with_base_url(
            self.base_url.as_str(),
            self.settings.user_agent.as_str(),
        )
        .context("Failed to create request")?;
        let funds = source.search().await.context("Failed to fetch funds")?;
        info!("Fetched {} funds", funds.len());

        let service = NotificationService::new(
            Arc::new(SendRecordRepositoryImpl::new(db)),
            Arc::new(SlackWebhookServiceImpl::new()),
            self.settings.slack_webhook_url.as_str(),
            self.base_url.as_str(),
        );

        Ok(service.notify_all(&funds).await)
    }
}
