//! Error types for the HUB-3 command-line interface

use hub3_codec::ValidationOutcome;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// CLI error types
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not the expected JSON document
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// Codec error
    #[error(transparent)]
    Codec(#[from] hub3_codec::Error),

    /// The record was checked and rejected
    #[error("Payment record rejected: {0}")]
    Rejected(ValidationOutcome),

    /// The IBAN failed the structural check
    #[error("Invalid IBAN: {0}")]
    InvalidIban(String),

    /// The OIB failed validation
    #[error("Invalid OIB {oib}: {reason}")]
    InvalidOib {
        oib: String,
        reason: hub3_ident::OibError,
    },

    /// Required invoice data is missing
    #[error("Invoice is incomplete, missing: {}", .0.join(", "))]
    IncompleteInvoice(Vec<String>),

    /// Unknown `--format` value
    #[error("Unknown format: {0}. Use 'json' or 'text'")]
    UnknownFormat(String),

    /// Unknown `--policy` value
    #[error("Unknown policy: {0}. Use 'default', 'lenient' or 'strict'")]
    UnknownPolicy(String),
}
