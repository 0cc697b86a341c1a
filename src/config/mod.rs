// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 命令行参数
pub mod cli;

/// 配置模块
///
/// 处理 YAML 配置文件：User-Agent、数据库路径与 Webhook 地址
pub mod settings;
