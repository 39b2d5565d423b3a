//! 产品页面处理器
//!
//! 失败时只向用户返回通用的纯文本提示，具体原因保留在 `PageError` 中并写入日志。

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::warn;

use super::{
    model::{InvalidNumericFormat, Product, ProductForm, ProductInput},
    view,
};
use crate::app::AppState;
use crate::core::error::StoreError;

pub const DELETE_ERROR_MESSAGE: &str = "Error while deleting";
pub const UPDATE_ERROR_MESSAGE: &str = "Error while updating";

/// 页面操作错误
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    InvalidNumericFormat(#[from] InvalidNumericFormat),
    #[error("表单字段缺失或无效: {0}")]
    MissingField(#[from] FormRejection),
    #[error("无效的产品 id: {0}")]
    InvalidId(#[from] PathRejection),
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            PageError::Store(StoreError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            PageError::Store(StoreError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            PageError::InvalidNumericFormat(_) | PageError::MissingField(_) => {
                StatusCode::BAD_REQUEST
            }
            // 与非整数 id 不匹配路由时一致
            PageError::InvalidId(_) => StatusCode::NOT_FOUND,
        }
    }

    fn into_plain_text(self, message: &'static str) -> Response {
        warn!(error = %self, "页面操作失败");
        (self.status(), message).into_response()
    }
}

pub async fn home(State(state): State<AppState>) -> Response {
    match state.product_service.list_products().await {
        Ok(products) => Html(view::render_home(&products)).into_response(),
        Err(err) => PageError::from(err).into_plain_text("Error while loading products"),
    }
}

pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    match remove(&state, id).await {
        Ok(()) => Redirect::to("/").into_response(),
        Err(err) => err.into_plain_text(DELETE_ERROR_MESSAGE),
    }
}

pub async fn edit_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    match load(&state, id).await {
        Ok(product) => Html(view::render_update(&product)).into_response(),
        Err(err) => err.into_plain_text(UPDATE_ERROR_MESSAGE),
    }
}

pub async fn submit_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Response {
    match apply_update(&state, id, form).await {
        Ok(()) => Redirect::to("/").into_response(),
        Err(err) => err.into_plain_text(UPDATE_ERROR_MESSAGE),
    }
}

async fn remove(state: &AppState, id: Result<Path<i64>, PathRejection>) -> Result<(), PageError> {
    let Path(id) = id?;
    state.product_service.delete_product(id).await?;
    Ok(())
}

async fn load(state: &AppState, id: Result<Path<i64>, PathRejection>) -> Result<Product, PageError> {
    let Path(id) = id?;
    state
        .product_service
        .get_product(id)
        .await?
        .ok_or(PageError::Store(StoreError::NotFound(id)))
}

/// 解析表单数值后整体覆盖记录
async fn apply_update(
    state: &AppState,
    id: Result<Path<i64>, PathRejection>,
    form: Result<Form<ProductForm>, FormRejection>,
) -> Result<(), PageError> {
    let Path(id) = id?;
    let Form(form) = form?;
    let input = ProductInput::try_from(form)?;
    state.product_service.update_product(id, input).await?;
    Ok(())
}
