//! 产品持久化服务
//!
//! 每个写操作在独立事务中执行并立即提交；提前返回时事务随 drop 回滚。

use sqlx::SqlitePool;
use tracing::info;

use super::model::{Product, ProductInput};
use crate::core::error::StoreError;

const PRODUCT_COLUMNS: &str = "id, name, description, price, qty";

#[derive(Clone)]
pub struct ProductService {
    pool: SqlitePool,
}

impl ProductService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 创建产品，名称重复时返回 `ConstraintViolation`
    pub async fn create_product(&self, input: ProductInput) -> Result<Product, StoreError> {
        let mut tx = self.pool.begin().await?;

        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO product (name, description, price, qty) VALUES (?, ?, ?, ?) RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.qty)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(id = product.id, name = %product.name, "产品已创建");
        Ok(product)
    }

    /// 按插入顺序返回全部产品
    pub async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM product ORDER BY id",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// 不存在时返回 `None`
    pub async fn get_product(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM product WHERE id = ?",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// 覆盖全部四个可变字段
    pub async fn update_product(&self, id: i64, input: ProductInput) -> Result<Product, StoreError> {
        let mut tx = self.pool.begin().await?;

        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE product SET name = ?, description = ?, price = ?, qty = ? WHERE id = ? RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.qty)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StoreError::NotFound(id))?;

        tx.commit().await?;

        info!(id, name = %product.name, "产品已更新");
        Ok(product)
    }

    /// 硬删除，返回删除前的记录
    pub async fn delete_product(&self, id: i64) -> Result<Product, StoreError> {
        let mut tx = self.pool.begin().await?;

        let product = sqlx::query_as::<_, Product>(&format!(
            "DELETE FROM product WHERE id = ? RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StoreError::NotFound(id))?;

        tx.commit().await?;

        info!(id, name = %product.name, "产品已删除");
        Ok(product)
    }
}
