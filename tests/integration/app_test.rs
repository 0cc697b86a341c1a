// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{fund_json, TestEnv};
use crowdbank_notify::config::settings::Settings;
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

/// 首次运行推送新基金并记录，第二次运行不再推送
#[tokio::test]
async fn test_new_fund_is_notified_once() {
    let env = TestEnv::new().await;
    env.mount_funds(vec![fund_json("F1", "Fund A", "1")]).await;
    env.mount_hook(200, 1).await;

    let report = env.run().await.expect("first run failed");
    assert_eq!(report.notified, 1);
    assert!(env.exists("F1").await);

    let bodies = env.posted_bodies().await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["text"], "Fund A");
    let attachment = &bodies[0]["attachments"][0];
    assert_eq!(attachment["title"], "Fund A subtitle");
    assert_eq!(
        attachment["title_link"],
        format!("{}/funds/F1", env.api.uri())
    );
    let currency = attachment["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["title"] == "通貨")
        .expect("currency field missing");
    assert_eq!(currency["value"], "日本円");

    let report = env.run().await.expect("second run failed");
    assert_eq!(report.skipped, 1);
    assert_eq!(report.attempted(), 0);
    assert_eq!(env.posted_bodies().await.len(), 1);
}

/// N 个基金中只有 M 个新基金时，恰好推送 M 次并记录 M 条
#[tokio::test]
async fn test_only_unrecorded_funds_are_posted() {
    let env = TestEnv::new().await;
    env.seed(&["F2", "F4"]).await;

    env.mount_funds(vec![
        fund_json("F1", "Fund 1", "1"),
        fund_json("F2", "Fund 2", "2"),
        fund_json("F3", "Fund 3", "3"),
        fund_json("F4", "Fund 4", "9"),
    ])
    .await;
    env.mount_hook(200, 2).await;

    let report = env.run().await.unwrap();
    assert_eq!(report.fetched, 4);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.notified, 2);

    let texts: Vec<String> = env
        .posted_bodies()
        .await
        .iter()
        .map(|b| b["text"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(texts, vec!["Fund 1", "Fund 3"]);
    assert!(env.exists("F1").await);
    assert!(env.exists("F3").await);
}

/// 推送失败的基金不记录，下次运行重新推送
#[tokio::test]
async fn test_failed_webhook_leaves_fund_eligible() {
    let env = TestEnv::new().await;
    env.mount_funds(vec![fund_json("F1", "Fund A", "1")]).await;
    env.mount_hook(500, 1).await;

    let report = env.run().await.expect("run should not abort on webhook failure");
    assert_eq!(report.failed, 1);
    assert!(!env.exists("F1").await);

    env.hook.reset().await;
    env.mount_hook(200, 1).await;

    let report = env.run().await.unwrap();
    assert_eq!(report.notified, 1);
    assert!(env.exists("F1").await);
}

/// 配置文件无法解析时，在任何网络请求之前失败
#[tokio::test]
async fn test_malformed_config_aborts_before_network() {
    let env = TestEnv::new().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&env.api)
        .await;
    env.mount_hook(200, 0).await;

    std::fs::write(&env.config_path, "UserAgent: [broken\n").unwrap();

    assert!(Settings::load(&env.config_path).is_err());
    assert!(env.run().await.is_err());
    assert!(!env.db_path.exists());
}

/// 基金接口返回非法 JSON 时，不发送任何 Webhook
#[tokio::test]
async fn test_malformed_fetch_aborts_before_webhook() {
    let env = TestEnv::new().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\": "))
        .expect(1)
        .mount(&env.api)
        .await;
    env.mount_hook(200, 0).await;

    let err = env.run().await.unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to fetch funds"));
    assert!(!env.exists("F1").await);
}

/// 基金接口返回错误状态时整体失败
#[tokio::test]
async fn test_fetch_error_status_is_fatal() {
    let env = TestEnv::new().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&env.api)
        .await;
    env.mount_hook(200, 0).await;

    assert!(env.run().await.is_err());
}
