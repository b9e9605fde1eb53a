use crate::oib::OibError;
use thiserror::Error;

/// Error types for the identifier validators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A character outside `A-Z0-9` was found while rearranging an IBAN
    #[error("Invalid character '{character}' in IBAN: {iban}")]
    InvalidIbanCharacter { iban: String, character: char },

    /// The IBAN is well formed but its MOD-97 remainder is not 1
    #[error("Invalid IBAN checksum: {0}")]
    InvalidIban(String),

    /// The OIB failed one of its checks
    #[error("Invalid OIB {oib}: {reason}")]
    InvalidOib { oib: String, reason: OibError },
}

/// Result type alias for identifier operations
pub type Result<T> = std::result::Result<T, Error>;
