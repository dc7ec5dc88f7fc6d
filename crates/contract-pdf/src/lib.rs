//! Contract document generation
//!
//! Turns a [`ContractInput`] into a paginated PDF service agreement between
//! a brand and a content creator:
//! - clause assembly with conditional text (`clauses`)
//! - Helvetica text measurement and justified wrapping (`metrics`)
//! - cursor-driven pagination into per-page display lists (`layout`)
//! - PDF serialization with lopdf (`writer`)
//! - BRL amounts in words (`extenso`)
//!
//! # Feature Flags
//!
//! - `server` (default): Enables async `generate_contract` (requires tokio).
//!   Without it the crate is sync only; use `render_contract`.

pub mod clauses;
pub mod error;
pub mod extenso;
pub mod layout;
pub mod metrics;
pub mod render;
pub mod writer;

pub use contract_types::ContractInput;
pub use error::ContractError;
pub use extenso::valor_por_extenso;
pub use layout::Composition;
pub use render::{compose_contract, render_contract, RenderOptions};

#[cfg(feature = "server")]
pub use render::generate_contract;

/// Parse PDF bytes and return page count
pub fn get_page_count(bytes: &[u8]) -> Result<u32, ContractError> {
    let doc =
        lopdf::Document::load_mem(bytes).map_err(|e| ContractError::Parse(e.to_string()))?;
    Ok(doc.get_pages().len() as u32)
}
