//! Router assembly

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    // CORS configuration for web clients
    let cors = if state.config.cors_allow_any {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Contract rendering
        .route("/api/contracts", post(handlers::create_contract))
        .route("/api/contracts/preview", post(handlers::preview_contract))
        // Amount in words
        .route("/api/extenso", get(handlers::extenso))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
