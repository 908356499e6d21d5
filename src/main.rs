//! api-router demo server entry point.
//!
//! Registers the demo endpoints under the configured prefix and serves
//! them with Axum.

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use api_router::api;
use api_router::config::RouterConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = RouterConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, prefix = %config.api_prefix, "starting api-router");

    // Build router
    let app = api::build_router(&config.api_prefix, config.openapi_enabled)?
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
