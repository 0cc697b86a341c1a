// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 已通知基金表迁移
///
/// 表结构与早期版本生成的 `send_lists` 表保持一致，
/// 所有语句均带 `IF NOT EXISTS`，对已有数据库文件执行时为空操作。
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SendLists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SendLists::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SendLists::CreatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(SendLists::UpdatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(SendLists::DeletedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(SendLists::FundId).text().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_send_lists_deleted_at")
                    .table(SendLists::Table)
                    .col(SendLists::DeletedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SendLists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SendLists {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    FundId,
}
