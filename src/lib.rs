// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 运行流程模块
///
/// 串联配置、数据库、基金获取与通知
pub mod app;

/// 配置模块
///
/// 处理命令行参数与 YAML 配置文件
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、服务和仓库接口
pub mod domain;

/// 基础设施模块
///
/// 提供数据库与 HTTP 等外部集成
pub mod infrastructure;

/// 工具模块
pub mod utils;
