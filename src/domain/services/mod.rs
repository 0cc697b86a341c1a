// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod fund_source;
pub mod notification_service;
pub mod webhook_service;
