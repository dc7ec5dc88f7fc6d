use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("Failed to serialize PDF: {0}")]
    Serialization(String),

    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    #[error("Render task failed: {0}")]
    TaskFailed(String),
}
