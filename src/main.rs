// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use portfolio_site::application::contact_service::ContactService;
use portfolio_site::application::portfolio_service::PortfolioService;
use portfolio_site::infrastructure::config::load_app_config;
use portfolio_site::infrastructure::http_content_source::HttpContentSource;
use portfolio_site::presentation::app_state::AppState;
use portfolio_site::presentation::handlers::{health_check, index, page_json, submit_contact};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config().context("Failed to load configuration")?;
    let timeout = config.backend.timeout();

    // Create content source (infrastructure layer)
    let source = Arc::new(HttpContentSource::new(&config.backend.url));

    // Create services (application layer)
    let portfolio_service = PortfolioService::new(source.clone(), timeout);
    let contact_service = ContactService::new(source, timeout);

    let state = Arc::new(AppState {
        portfolio_service,
        contact_service,
        site: config.site,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/", get(index))
        .route("/api/page", get(page_json))
        .route("/contact", post(submit_contact))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .addr
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server.addr))?;
    tracing::info!(
        "Starting portfolio-site on {} (backend {})",
        addr,
        config.backend.url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
