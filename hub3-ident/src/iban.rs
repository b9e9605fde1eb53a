use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Electronic-format IBAN shape: country code, check digits, alphanumeric BBAN
static IBAN_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{1,30}$").expect("Failed to compile IBAN_SHAPE_REGEX")
});

/// Compute the MOD-97 remainder of an IBAN.
///
/// The first four characters are moved to the end, every letter is replaced
/// by its two-digit code (A = 10 … Z = 35) and the resulting numeral is
/// reduced modulo 97. The numeral is folded one digit at a time, which gives
/// the same remainder as reducing the whole arbitrary-precision integer.
///
/// The input is uppercased first. Any character outside `A-Z0-9` is an error.
pub fn iban_remainder(iban: &str) -> Result<u32> {
    let iban = iban.to_ascii_uppercase();
    let split = iban.char_indices().nth(4).map_or(iban.len(), |(i, _)| i);
    let (head, tail) = iban.split_at(split);

    let mut remainder = 0u32;
    for c in tail.chars().chain(head.chars()) {
        match c {
            '0'..='9' => {
                remainder = (remainder * 10 + (c as u32 - '0' as u32)) % 97;
            }
            'A'..='Z' => {
                let code = c as u32 - 'A' as u32 + 10;
                remainder = (remainder * 100 + code) % 97;
            }
            _ => {
                return Err(Error::InvalidIbanCharacter {
                    iban: iban.clone(),
                    character: c,
                })
            }
        }
    }

    Ok(remainder)
}

/// Validate the structure of an IBAN using the MOD-97 algorithm.
///
/// This only checks the check digits, not whether the account exists.
/// Inputs with characters outside `A-Z0-9` (after uppercasing) return `false`.
pub fn validate_iban(iban: &str) -> bool {
    !iban.is_empty() && matches!(iban_remainder(iban), Ok(1))
}

/// A structurally valid IBAN in electronic (uppercase, unspaced) format
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iban(String);

impl Iban {
    /// Parse and validate an IBAN
    pub fn new(iban: &str) -> Result<Self> {
        let normalized = iban.to_ascii_uppercase();
        if iban_remainder(&normalized)? != 1 || !IBAN_SHAPE_REGEX.is_match(&normalized) {
            return Err(Error::InvalidIban(iban.to_string()));
        }
        Ok(Self(normalized))
    }

    /// The IBAN as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ISO 3166-1 alpha-2 country code (e.g. "HR")
    pub fn country_code(&self) -> &str {
        &self.0[..2]
    }

    /// The two check digits following the country code
    pub fn check_digits(&self) -> &str {
        &self.0[2..4]
    }

    /// Basic Bank Account Number, everything after the check digits
    pub fn bban(&self) -> &str {
        &self.0[4..]
    }
}

impl FromStr for Iban {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Iban::new(s)
    }
}

impl std::fmt::Display for Iban {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Iban {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Iban {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Iban::from_str(&s).map_err(serde::de::Error::custom)
    }
}
