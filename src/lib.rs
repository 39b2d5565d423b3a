//! # 产品目录服务
//!
//! 单表产品目录的增删改查，提供两种访问方式：
//! - `/product` 下的 JSON API
//! - `/`、`/update/:id`、`/delete/:id` 服务端渲染页面
//!
//! 数据保存在单个 SQLite 文件中，每个写请求独立提交。

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::{routes::create_router, AppState};
pub use infrastructure::{config::AppConfig, database::DatabaseManager};

use app::product::service::ProductService;

/// 打开数据库并构建完整路由
pub async fn build_app(database_url: &str) -> Result<axum::Router, sqlx::Error> {
    let database = DatabaseManager::new(database_url).await?;
    let state = AppState::new(ProductService::new(database.get_pool().clone()));
    Ok(create_router(state))
}
