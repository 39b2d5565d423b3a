//! 核心中间件模块

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// 请求日志中间件
///
/// 服务端错误记为 warn，其余记为 info。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        warn!(%method, %uri, %status, elapsed_ms, "请求处理失败");
    } else {
        info!(%method, %uri, %status, elapsed_ms, "请求完成");
    }

    response
}
