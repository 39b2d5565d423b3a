//! 路由装配

use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use super::{
    product::{handler, page},
    AppState,
};
use crate::core::middleware::request_logging_middleware;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // 页面
        .route("/", get(page::home))
        .route("/delete/:id", get(page::delete_product))
        .route(
            "/update/:id",
            get(page::edit_product).post(page::submit_product),
        )
        // JSON API
        .route(
            "/product",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/product/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
