//! Data models for Contract API

use chrono::NaiveDate;
use contract_pdf::RenderOptions;
use serde::{Deserialize, Serialize};

/// Query parameters accepted by the render endpoints
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderQuery {
    /// Date printed on the contract; today when absent
    pub issued_on: Option<NaiveDate>,
}

impl RenderQuery {
    pub fn options(&self) -> RenderOptions {
        self.issued_on
            .map(RenderOptions::issued_on)
            .unwrap_or_default()
    }
}

/// Rendered contract returned inline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub contract_number: String,
    pub page_count: u32,
    pub size_bytes: usize,
    /// Base64 encoded PDF
    pub data_base64: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtensoQuery {
    pub valor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensoResponse {
    pub valor: String,
    pub extenso: String,
}
