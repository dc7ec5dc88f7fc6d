//! Application state for Contract API

use crate::config::ApiConfig;

/// Rendering is stateless; only configuration is shared
pub struct AppState {
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}
