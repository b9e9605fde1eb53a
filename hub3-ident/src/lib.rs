//! Identifier validators for Croatian domestic payments
//!
//! This library implements the two check-digit algorithms a HUB-3 payment
//! order relies on:
//!
//! - IBAN structural validation (ISO 13616, MOD-97)
//! - OIB validation (Croatian tax identification number, ISO 7064 MOD 11,10)
//!
//! Neither check consults a registry; a valid result means only that the
//! check digits are consistent.
//!
//! ```
//! use hub3_ident::{check_oib, validate_iban};
//!
//! assert!(validate_iban("HR1210010051863000160"));
//! assert!(check_oib("12345678903").valid);
//! ```
pub mod error;
mod iban;
mod oib;

pub use error::{Error, Result};
pub use iban::{iban_remainder, validate_iban, Iban};
pub use oib::{
    check_oib, format_oib, oib_check_digit, validate_oib, Oib, OibCheck, OibError, OIB_LENGTH,
};
