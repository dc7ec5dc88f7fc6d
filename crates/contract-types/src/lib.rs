//! Data model for creator-marketplace contracts
//!
//! These are the plain records the rest of the application assembles
//! (company, creator, campaign, application) and hands to the contract
//! renderer. Field names follow the upstream camelCase JSON.

pub mod types;

pub use types::{
    Address, Application, Campaign, Company, CompanyOwner, ContractInput, Creator,
};

/// Trim an optional field, treating blank strings as absent
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
