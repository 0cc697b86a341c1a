// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crowdbank_notify::app::AppContext;
use crowdbank_notify::config::cli::Cli;
use crowdbank_notify::config::settings::Settings;
use crowdbank_notify::utils::telemetry;
use std::process::ExitCode;
use tracing::{error, info};

/// 主函数
///
/// 单次执行：加载配置 → 初始化数据库 → 获取基金 → 推送新基金。
/// 所有步骤在同一线程上顺序执行，致命错误以退出码 1 结束。
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_args(std::env::args_os());

    telemetry::init_telemetry();

    let settings = match Settings::load(&cli.conf) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("Configuration loaded from {}", cli.conf.display());

    match AppContext::new(settings).run().await {
        Ok(report) => {
            info!("Done: {} new fund(s) notified", report.notified);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
