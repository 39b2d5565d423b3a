use axum_test::TestServer;
use product_catalog::build_app;

/// 每个测试使用独立的内存数据库
pub async fn create_test_server() -> TestServer {
    let app = build_app("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    TestServer::new(app).unwrap()
}
