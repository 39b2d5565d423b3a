//! 应用层

pub mod product;
pub mod routes;

use product::service::ProductService;

/// 共享应用状态，存储句柄通过它注入各处理器
#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

impl AppState {
    pub fn new(product_service: ProductService) -> Self {
        Self { product_service }
    }
}
