use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::non_blank;

/// Postal address; every part is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl Address {
    /// Single-line rendering of the present parts, e.g.
    /// "Rua Augusta, 1500, Sala 4, Consolação, São Paulo/SP, CEP 01304-001"
    pub fn one_line(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();

        for part in [&self.street, &self.number, &self.complement, &self.neighborhood] {
            if let Some(p) = non_blank(part) {
                parts.push(p.to_string());
            }
        }

        match (self.city(), self.state()) {
            (Some(city), Some(state)) => parts.push(format!("{}/{}", city, state)),
            (Some(city), None) => parts.push(city.to_string()),
            (None, Some(state)) => parts.push(state.to_string()),
            (None, None) => {}
        }

        if let Some(zip) = non_blank(&self.zip_code) {
            parts.push(format!("CEP {}", zip));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    pub fn city(&self) -> Option<&str> {
        non_blank(&self.city)
    }

    pub fn state(&self) -> Option<&str> {
        non_blank(&self.state)
    }
}

/// User who owns the company account and signs on its behalf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyOwner {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Contracting brand (CONTRATANTE)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub trade_name: Option<String>,
    /// CNPJ
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub owner: Option<CompanyOwner>,
}

/// Contracted content creator (CONTRATADO)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub name: String,
    pub email: String,
    /// CPF
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub social_handle: Option<String>,
}

impl Creator {
    /// Social handle with exactly one leading `@`
    pub fn handle(&self) -> Option<String> {
        non_blank(&self.social_handle).map(|h| format!("@{}", h.trim_start_matches('@')))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub title: String,
    pub deadline: NaiveDate,
}

/// Creator's application to the campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: u64,
}

/// Everything the renderer needs to produce one contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractInput {
    pub company: Company,
    pub creator: Creator,
    pub campaign: Campaign,
    pub application: Application,
    /// Formatted BRL amount, e.g. "1.250,50"
    pub contract_value: String,
    #[serde(default)]
    pub includes_product_shipping: bool,
    #[serde(default)]
    pub service_description: Option<String>,
    #[serde(default)]
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub payment_terms: Option<String>,
    #[serde(default)]
    pub additional_clauses: Option<String>,
    #[serde(default)]
    pub contract_number: Option<String>,
}

impl ContractInput {
    /// Explicit contract number, or the application id zero-padded to six digits
    pub fn contract_number(&self) -> String {
        match non_blank(&self.contract_number) {
            Some(number) => number.to_string(),
            None => format!("{:06}", self.application.id),
        }
    }

    /// Deliverables with blank entries dropped
    pub fn deliverables(&self) -> Vec<&str> {
        self.deliverables
            .iter()
            .map(|d| d.trim())
            .filter(|d| !d.is_empty())
            .collect()
    }

    pub fn service_description(&self) -> Option<&str> {
        non_blank(&self.service_description)
    }

    pub fn payment_terms(&self) -> Option<&str> {
        non_blank(&self.payment_terms)
    }

    pub fn additional_clauses(&self) -> Option<&str> {
        non_blank(&self.additional_clauses)
    }
}
