//! HTTP handlers for Contract API

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use contract_pdf::{generate_contract, get_page_count, valor_por_extenso, RenderOptions};
use contract_types::ContractInput;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

const PDF_MIME: &str = "application/pdf";

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Render on the blocking pool, bounded by the configured timeout
async fn render(
    state: &AppState,
    input: ContractInput,
    options: RenderOptions,
) -> Result<Vec<u8>, ApiError> {
    let limit = state.config.render_timeout;
    match tokio::time::timeout(limit, generate_contract(input, options)).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(ApiError::Timeout(limit)),
    }
}

/// Reject inputs the contract cannot be drawn up without
fn validate(input: &ContractInput) -> Result<(), ApiError> {
    let required = [
        ("company.name", input.company.name.as_str()),
        ("creator.name", input.creator.name.as_str()),
        ("contractValue", input.contract_value.as_str()),
    ];
    match required.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(ApiError::InvalidRequest(format!("{} is required", field))),
        None => Ok(()),
    }
}

/// Download file name; anything outside `[A-Za-z0-9_-]` becomes `_`
fn attachment_name(contract_number: &str) -> String {
    let safe: String = contract_number
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("contrato-{}.pdf", safe)
}

/// Render a contract and return it as a PDF download
pub async fn create_contract(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RenderQuery>,
    Json(input): Json<ContractInput>,
) -> Result<impl IntoResponse, ApiError> {
    validate(&input)?;
    let contract_number = input.contract_number();
    let bytes = render(&state, input, query.options()).await?;

    tracing::info!(
        contract_number = %contract_number,
        bytes = bytes.len(),
        "Served contract PDF"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, PDF_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", attachment_name(&contract_number)),
            ),
        ],
        bytes,
    ))
}

/// Render a contract and return it inline with its page count
pub async fn preview_contract(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RenderQuery>,
    Json(input): Json<ContractInput>,
) -> Result<Json<PreviewResponse>, ApiError> {
    validate(&input)?;
    let contract_number = input.contract_number();
    let bytes = render(&state, input, query.options()).await?;
    let page_count = get_page_count(&bytes)?;

    Ok(Json(PreviewResponse {
        contract_number,
        page_count,
        size_bytes: bytes.len(),
        data_base64: BASE64.encode(&bytes),
        mime_type: PDF_MIME.to_string(),
    }))
}

/// Spell out a BRL amount
pub async fn extenso(Query(query): Query<ExtensoQuery>) -> Json<ExtensoResponse> {
    let extenso = valor_por_extenso(&query.valor);
    Json(ExtensoResponse {
        valor: query.valor,
        extenso,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_attachment_name() {
        assert_eq!(attachment_name("000042"), "contrato-000042.pdf");
        assert_eq!(attachment_name("CT-2026/07"), "contrato-CT-2026_07.pdf");
        assert_eq!(attachment_name("nº \"1\""), "contrato-n___1_.pdf");
    }
}
