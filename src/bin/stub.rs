use anyhow::Result;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use polyglot_console::stub;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("polyglot_console=debug,tower_http=debug")),
        )
        .init();

    let addr: SocketAddr = std::env::var("STUB_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8000".to_string())
        .parse()
        .map_err(|e| anyhow::anyhow!("STUB_ADDR must be host:port: {}", e))?;

    let app = stub::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    info!("Stub translation endpoint on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
