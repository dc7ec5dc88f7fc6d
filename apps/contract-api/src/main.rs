//! Contract API Server - renders creator marketplace contracts
//!
//! Provides REST endpoints for:
//! - Contract PDF download
//! - Contract preview (page count and base64 payload)
//! - BRL amounts in words

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;

use config::ApiConfig;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("contract_api=info".parse()?)
                .add_directive("contract_pdf=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let config = ApiConfig::from_env();
    info!(
        port = config.port,
        render_timeout_ms = config.render_timeout.as_millis() as u64,
        cors_allow_any = config.cors_allow_any,
        "Initializing Contract API..."
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = routes::router(Arc::new(AppState::new(config)));

    info!("Starting Contract API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
