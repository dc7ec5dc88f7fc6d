//! Error types for Contract API

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contract_pdf::ContractError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Contract rendering timed out after {0:?}")]
    Timeout(Duration),

    #[error("Render error: {0}")]
    Render(#[from] ContractError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Timeout(limit) => {
                tracing::warn!("Contract rendering exceeded {:?}", limit);
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "Contract rendering timed out".to_string(),
                )
            }
            ApiError::Render(e) => {
                tracing::error!("Render error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to render contract".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::InvalidRequest("x".into()), StatusCode::BAD_REQUEST),
            (
                ApiError::Timeout(Duration::from_millis(1)),
                StatusCode::GATEWAY_TIMEOUT,
            ),
            (
                ApiError::Render(ContractError::Serialization("io".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
