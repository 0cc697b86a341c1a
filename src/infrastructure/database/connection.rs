// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// 将配置中的数据库路径转换为 SQLite 连接串
///
/// 已经是 `sqlite:` 形式的值原样使用；普通文件路径追加 `mode=rwc`，
/// 文件不存在时自动创建。
pub fn sqlite_url(database: &str) -> String {
    if database.starts_with("sqlite:") {
        database.to_owned()
    } else {
        format!("sqlite://{}?mode=rwc", database)
    }
}

/// 打开数据库连接
///
/// # 参数
///
/// * `database` - 数据库文件路径
///
/// # 返回值
///
/// * `Ok(DatabaseConnection)` - 数据库连接
/// * `Err(DbErr)` - 连接过程中出现的错误
pub async fn create_pool(database: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(sqlite_url(database));

    // Single writer; runs never overlap within one process.
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    Database::connect(opt).await
}
