use product_catalog::{build_app, infrastructure::logger::Logger, AppConfig};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    Logger::init(&config.logging.level);

    info!("Starting product catalog server...");

    let app = build_app(&config.database.url).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        e
    })?;

    let listener = TcpListener::bind(config.server.socket_addr()?).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Product catalog running on http://{}", addr);
    info!("📊 Available endpoints:");
    info!("   GET    /                 - Product list page");
    info!("   GET    /update/:id       - Edit form");
    info!("   POST   /update/:id       - Submit edit form");
    info!("   GET    /delete/:id       - Delete and return to list");
    info!("   GET    /product          - List products");
    info!("   POST   /product          - Create product");
    info!("   GET    /product/:id      - Get product by ID");
    info!("   PUT    /product/:id      - Update product");
    info!("   DELETE /product/:id      - Delete product");

    axum::serve(listener, app).await?;

    Ok(())
}
