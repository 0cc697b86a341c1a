// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crowdbank_notify::app::AppContext;
use crowdbank_notify::config::settings::Settings;
use crowdbank_notify::domain::repositories::send_record_repository::SendRecordRepository;
use crowdbank_notify::domain::services::notification_service::NotifyReport;
use crowdbank_notify::infrastructure::database::connection;
use crowdbank_notify::infrastructure::repositories::send_record_repo_impl::SendRecordRepositoryImpl;
use migration::{Migrator, MigratorTrait};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const WEBHOOK_PATH: &str = "/services/T000/B000/hook";

#[allow(dead_code)]
pub struct TestEnv {
    pub dir: TempDir,
    pub api: MockServer,
    pub hook: MockServer,
    pub config_path: PathBuf,
    pub db_path: PathBuf,
}

impl TestEnv {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let api = MockServer::start().await;
        let hook = MockServer::start().await;
        let db_path = dir.path().join("notify.db");
        let config_path = dir.path().join("config.yaml");

        let yaml = format!(
            "UserAgent: crowdbank-notify-test/1.0\nDatabase: {}\nSlackWebhookURL: {}{}\n",
            db_path.display(),
            hook.uri(),
            WEBHOOK_PATH
        );
        std::fs::write(&config_path, yaml).expect("Failed to write config");

        Self {
            dir,
            api,
            hook,
            config_path,
            db_path,
        }
    }

    /// 从配置文件加载并执行一次完整流程
    pub async fn run(&self) -> anyhow::Result<NotifyReport> {
        let settings = Settings::load(&self.config_path)?;
        AppContext::with_base_url(settings, self.api.uri()).run().await
    }

    pub async fn repo(&self) -> SendRecordRepositoryImpl {
        let db = connection::create_pool(self.db_path.to_str().unwrap())
            .await
            .expect("Failed to open database");
        SendRecordRepositoryImpl::new(Arc::new(db))
    }

    /// 预先写入已通知记录
    pub async fn seed(&self, fund_ids: &[&str]) {
        let db = connection::create_pool(self.db_path.to_str().unwrap())
            .await
            .expect("Failed to open database");
        Migrator::up(&db, None).await.expect("Failed to migrate");

        let repo = SendRecordRepositoryImpl::new(Arc::new(db));
        for fund_id in fund_ids {
            repo.create(fund_id).await.expect("Failed to seed record");
        }
    }

    pub async fn exists(&self, fund_id: &str) -> bool {
        self.repo().await.exists_by_fund_id(fund_id).await.unwrap()
    }

    pub async fn mount_funds(&self, funds: Vec<Value>) {
        let total = funds.len();
        Mock::given(method("GET"))
            .and(path("/api/v1/funds/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"size": 20, "total": total, "list": funds}
            })))
            .mount(&self.api)
            .await;
    }

    pub async fn mount_hook(&self, status: u16, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path(WEBHOOK_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string("ok"))
            .expect(expected_calls)
            .mount(&self.hook)
            .await;
    }

    pub async fn posted_bodies(&self) -> Vec<Value> {
        self.hook
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect()
    }
}

pub fn fund_json(id: &str, name: &str, currency_id: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "subtitle": format!("{} subtitle", name),
        "limitAmount": 10000000,
        "rate": "3.0",
        "description": "description",
        "url": format!("/funds/{}", id),
        "regionName": "Japan",
        "projectName": "Real estate",
        "openTime": "2024/02/01 12:00",
        "closeTime": "2024/02/15 12:00",
        "limitTime": "2024/02/29",
        "raiseMethod": "Lottery",
        "currencyId": currency_id
    })
}
