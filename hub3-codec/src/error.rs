//! Error types for payload validation and encoding

use crate::validation::ValidationOutcome;
use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Codec error types
#[derive(Debug, Error)]
pub enum Error {
    /// The record failed validation; carries every violated rule
    #[error("Validation failed: {0}")]
    Validation(ValidationOutcome),

    /// An amount computation exceeded the representable range
    #[error("Amount overflow: {0}")]
    AmountOverflow(String),

    /// Amount text could not be read as minor units
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Identifier validation error
    #[error("Identifier error: {0}")]
    Ident(#[from] hub3_ident::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// The validation outcome, if this is a validation failure
    pub fn outcome(&self) -> Option<&ValidationOutcome> {
        match self {
            Self::Validation(outcome) => Some(outcome),
            _ => None,
        }
    }
}
