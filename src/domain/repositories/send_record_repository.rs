// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::send_record::SendRecord;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误，包括唯一约束冲突
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// 已通知记录仓库特质
///
/// 定义已通知基金 ID 的数据访问接口
#[async_trait]
pub trait SendRecordRepository: Send + Sync {
    /// 检查基金是否已通知过
    ///
    /// 不区分软删除，只要存在记录即返回 `true`
    async fn exists_by_fund_id(&self, fund_id: &str) -> Result<bool, RepositoryError>;
    /// 根据基金 ID 查找记录
    async fn find_by_fund_id(&self, fund_id: &str) -> Result<Option<SendRecord>, RepositoryError>;
    /// 记录基金已通知，同一基金 ID 重复写入会失败
    async fn create(&self, fund_id: &str) -> Result<SendRecord, RepositoryError>;
}
