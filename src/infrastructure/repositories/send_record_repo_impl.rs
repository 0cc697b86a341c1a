// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::send_record::SendRecord;
use crate::domain::repositories::send_record_repository::{
    RepositoryError, SendRecordRepository,
};
use crate::infrastructure::database::entities::send_list;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 已通知记录仓库实现
#[derive(Clone)]
pub struct SendRecordRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl SendRecordRepositoryImpl {
    /// 创建新的已通知记录仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SendRecordRepository for SendRecordRepositoryImpl {
    async fn exists_by_fund_id(&self, fund_id: &str) -> Result<bool, RepositoryError> {
        let count = send_list::Entity::find()
            .filter(send_list::Column::FundId.eq(fund_id))
            .count(self.db.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn find_by_fund_id(&self, fund_id: &str) -> Result<Option<SendRecord>, RepositoryError> {
        let model = send_list::Entity::find()
            .filter(send_list::Column::FundId.eq(fund_id))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, fund_id: &str) -> Result<SendRecord, RepositoryError> {
        let now = Utc::now();
        let active_model = send_list::ActiveModel {
            fund_id: Set(fund_id.to_owned()),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            deleted_at: Set(None),
            ..Default::default()
        };

        let model = active_model.insert(self.db.as_ref()).await?;

        Ok(model.into())
    }
}

impl From<send_list::Model> for SendRecord {
    fn from(model: send_list::Model) -> Self {
        Self {
            id: model.id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
            fund_id: model.fund_id,
        }
    }
}
