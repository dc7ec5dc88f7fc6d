//! Contract rendering entry points

use chrono::NaiveDate;
use contract_types::ContractInput;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::clauses::{assemble, Masthead};
use crate::error::ContractError;
use crate::layout::{compose, Composition};
use crate::writer::write_pdf;

/// Per-call rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// Date stamped in the header and the closing line
    pub issued_on: NaiveDate,
}

impl RenderOptions {
    pub fn issued_on(issued_on: NaiveDate) -> Self {
        Self { issued_on }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            issued_on: chrono::Local::now().date_naive(),
        }
    }
}

/// Lay out a contract without serializing it
pub fn compose_contract(input: &ContractInput, options: &RenderOptions) -> Composition {
    let masthead = Masthead::new(input, options.issued_on);
    let blocks = assemble(input, options.issued_on);
    compose(&blocks, &masthead)
}

/// Render a contract to PDF bytes
pub fn render_contract(
    input: &ContractInput,
    options: &RenderOptions,
) -> Result<Vec<u8>, ContractError> {
    let composition = compose_contract(input, options);
    let contract_number = input.contract_number();
    let bytes = write_pdf(&composition, &format!("Contrato {}", contract_number))?;

    info!(
        contract_number = %contract_number,
        pages = composition.page_count(),
        bytes = bytes.len(),
        "Rendered contract"
    );

    Ok(bytes)
}

/// Render on tokio's blocking pool
#[cfg(feature = "server")]
pub async fn generate_contract(
    input: ContractInput,
    options: RenderOptions,
) -> Result<Vec<u8>, ContractError> {
    tokio::task::spawn_blocking(move || render_contract(&input, &options))
        .await
        .map_err(|e| ContractError::TaskFailed(e.to_string()))?
}
