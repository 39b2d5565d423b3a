//! 数据库基础设施

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Error,
};
use std::{str::FromStr, time::Duration};
use tracing::info;

pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    /// 打开（必要时创建）SQLite 数据库文件并建表
    pub async fn new(database_url: &str) -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // 内存库每个连接都是独立的库，只能保留一个常驻连接
        let in_memory = database_url.contains(":memory:");
        let pool = SqlitePoolOptions::new()
            .max_connections(if in_memory { 1 } else { 5 })
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        create_tables(&pool).await?;
        info!(database_url, "数据库已就绪");

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// 创建数据库表（无迁移机制，仅在缺失时建表）
pub async fn create_tables(pool: &SqlitePool) -> Result<(), Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS product (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(100) NOT NULL UNIQUE,
            description VARCHAR(200) NOT NULL,
            price REAL NOT NULL,
            qty INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
