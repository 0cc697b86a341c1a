// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型
///
/// 基金、已通知记录与 Webhook 消息
pub mod fund;
pub mod send_record;
pub mod webhook;
