// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::fund::Fund;
use crate::domain::models::webhook::WebhookMessage;
use crate::domain::repositories::send_record_repository::SendRecordRepository;
use crate::domain::services::webhook_service::WebhookService;
use std::sync::Arc;
use tracing::{debug, error, info};

/// 单个基金的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// 已通知过，跳过
    AlreadySent,
    /// 推送成功并已记录
    Notified,
    /// 推送失败，未记录，下次运行会重试
    Failed,
    /// 推送成功但记录失败，下次运行可能重复推送
    Unrecorded,
}

/// 一次运行的汇总
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotifyReport {
    pub fetched: usize,
    pub skipped: usize,
    pub notified: usize,
    pub failed: usize,
    pub unrecorded: usize,
}

impl NotifyReport {
    fn record(&mut self, outcome: NotifyOutcome) {
        match outcome {
            NotifyOutcome::AlreadySent => self.skipped += 1,
            NotifyOutcome::Notified => self.notified += 1,
            NotifyOutcome::Failed => self.failed += 1,
            NotifyOutcome::Unrecorded => self.unrecorded += 1,
        }
    }

    /// 实际尝试推送的次数
    pub fn attempted(&self) -> usize {
        self.notified + self.failed + self.unrecorded
    }
}

/// 新基金通知服务
///
/// 对每个基金依次执行：查重 → 推送 → 记录。先推送后记录，
/// 记录失败时宁可下次重复推送，也不丢失通知。
pub struct NotificationService<R: SendRecordRepository, W: WebhookService> {
    /// 已通知记录仓库
    repo: Arc<R>,
    /// Webhook 发送器
    webhook: Arc<W>,
    /// Webhook 地址
    webhook_url: String,
    /// 详情链接的站点根地址
    base_url: String,
}

impl<R: SendRecordRepository, W: WebhookService> NotificationService<R, W> {
    /// 创建新的通知服务
    ///
    /// # 参数
    ///
    /// * `repo` - 已通知记录仓库
    /// * `webhook` - Webhook 发送器
    /// * `webhook_url` - 推送目标地址
    /// * `base_url` - 拼接基金详情链接用的站点根地址
    pub fn new(
        repo: Arc<R>,
        webhook: Arc<W>,
        webhook_url: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            repo,
            webhook,
            webhook_url: webhook_url.into(),
            base_url: base_url.into(),
        }
    }

    /// 按接口返回顺序处理全部基金
    ///
    /// 单个基金失败只记录日志，不影响后续基金
    pub async fn notify_all(&self, funds: &[Fund]) -> NotifyReport {
        let mut report = NotifyReport {
            fetched: funds.len(),
            ..Default::default()
        };

        for fund in funds {
            let outcome = self.notify_fund(fund).await;
            report.record(outcome);
        }

        info!(
            fetched = report.fetched,
            skipped = report.skipped,
            notified = report.notified,
            failed = report.failed,
            unrecorded = report.unrecorded,
            "Notification run finished"
        );

        report
    }

    /// 处理单个基金
    pub async fn notify_fund(&self, fund: &Fund) -> NotifyOutcome {
        match self.repo.exists_by_fund_id(&fund.id).await {
            Ok(true) => {
                debug!("Fund {} already notified, skipping", fund.id);
                return NotifyOutcome::AlreadySent;
            }
            Ok(false) => {}
            // Treated as unsent: a duplicate post beats a missed one.
            Err(e) => error!("Failed to look up fund {}: {}", fund.id, e),
        }

        let message = WebhookMessage::for_fund(fund, &self.base_url);
        if let Err(e) = self.webhook.send_webhook(&self.webhook_url, &message).await {
            error!("Failed to post webhook for fund {}: {}", fund.id, e);
            return NotifyOutcome::Failed;
        }
        info!("Notified fund {} ({})", fund.id, fund.name);

        match self.repo.create(&fund.id).await {
            Ok(_) => NotifyOutcome::Notified,
            Err(e) => {
                error!("Failed to save fund {} to database: {}", fund.id, e);
                NotifyOutcome::Unrecorded
            }
        }
    }
}
