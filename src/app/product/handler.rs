//! 产品 JSON API 处理器

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};

use super::model::{Product, ProductInput};
use crate::app::AppState;
use crate::core::error::CoreError;

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Json<Product>, CoreError> {
    let Json(input) = payload?;
    let product = state.product_service.create_product(input).await?;
    Ok(Json(product))
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.product_service.list_products().await?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, CoreError> {
    state
        .product_service
        .get_product(id)
        .await?
        .map(Json)
        .ok_or_else(|| CoreError::NotFound(format!("产品不存在: id={}", id)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<Json<Product>, CoreError> {
    let Json(input) = payload?;
    let product = state.product_service.update_product(id, input).await?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, CoreError> {
    let product = state.product_service.delete_product(id).await?;
    Ok(Json(product))
}
