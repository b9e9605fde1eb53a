//! OIB (Osobni identifikacijski broj), the Croatian personal and business
//! tax identification number.
//!
//! An OIB is 11 digits; the last one is an ISO 7064 MOD 11,10 check digit
//! over the first ten.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digits in an OIB
pub const OIB_LENGTH: usize = 11;

static OIB_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{11}$").expect("Failed to compile OIB_REGEX"));

/// Why an OIB was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "lowercase")]
pub enum OibError {
    /// Not exactly 11 characters
    #[error("OIB must contain exactly 11 digits")]
    Length,
    /// Contains something other than ASCII digits
    #[error("OIB may only contain digits")]
    Charset,
    /// The check digit does not match
    #[error("OIB check digit is wrong")]
    Checksum,
}

impl OibError {
    /// Wire reason code: "length", "charset" or "checksum"
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Charset => "charset",
            Self::Checksum => "checksum",
        }
    }

    /// User-facing Croatian message
    pub fn message_hr(&self) -> &'static str {
        match self {
            Self::Length => "OIB mora sadržavati točno 11 znamenki",
            Self::Charset => "OIB može sadržavati samo brojeve",
            Self::Checksum => "OIB nije ispravan (pogrešna kontrolna znamenka)",
        }
    }
}

/// Serializable outcome of an OIB check, `{ "valid": bool, "reason"?: ... }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OibCheck {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<OibError>,
}

impl From<std::result::Result<(), OibError>> for OibCheck {
    fn from(result: std::result::Result<(), OibError>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                reason: None,
            },
            Err(reason) => Self {
                valid: false,
                reason: Some(reason),
            },
        }
    }
}

/// Compute the check digit for the first ten digits of an OIB.
///
/// Returns `None` unless `prefix` is exactly ten ASCII digits.
pub fn oib_check_digit(prefix: &str) -> Option<u8> {
    if prefix.len() != OIB_LENGTH - 1 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut sum: u8 = 10;
    for digit in prefix.bytes().map(|b| b - b'0') {
        sum = (sum + digit) % 10;
        if sum == 0 {
            sum = 10;
        }
        sum = (sum * 2) % 11;
    }

    Some((11 - sum) % 10)
}

/// Validate an OIB.
///
/// Length is checked first, then the character set, then the check digit,
/// so a 10-digit string always reports [`OibError::Length`].
pub fn validate_oib(oib: &str) -> std::result::Result<(), OibError> {
    if oib.chars().count() != OIB_LENGTH {
        return Err(OibError::Length);
    }
    if !OIB_REGEX.is_match(oib) {
        return Err(OibError::Charset);
    }

    let (prefix, last) = oib.split_at(OIB_LENGTH - 1);
    let expected = oib_check_digit(prefix).ok_or(OibError::Charset)?;
    if last.as_bytes()[0] - b'0' != expected {
        return Err(OibError::Checksum);
    }

    Ok(())
}

/// Validate an OIB and return a serializable report
pub fn check_oib(oib: &str) -> OibCheck {
    validate_oib(oib).into()
}

/// Keep only the digits of `value`, truncated to 11.
///
/// Input-mask helper for form fields; does not validate.
pub fn format_oib(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(OIB_LENGTH)
        .collect()
}

/// A validated OIB
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Oib(String);

impl Oib {
    /// Parse and validate an OIB
    pub fn new(oib: &str) -> Result<Self> {
        validate_oib(oib).map_err(|reason| Error::InvalidOib {
            oib: oib.to_string(),
            reason,
        })?;
        Ok(Self(oib.to_string()))
    }

    /// The OIB digits
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing check digit
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[OIB_LENGTH - 1] - b'0'
    }
}

impl FromStr for Oib {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Oib::new(s)
    }
}

impl fmt::Display for Oib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Oib {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Oib {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Oib::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("00000000001")]
    #[case("12345678903")]
    #[case("69517075169")]
    #[case("94116390836")]
    fn test_valid_oibs(#[case] oib: &str) {
        assert_eq!(validate_oib(oib), Ok(()));
    }

    #[rstest]
    #[case("", OibError::Length)]
    #[case("1234567890", OibError::Length)]
    #[case("123456789033", OibError::Length)]
    #[case("1234567890A", OibError::Charset)]
    #[case("12345 78903", OibError::Charset)]
    #[case("12345678904", OibError::Checksum)]
    #[case("00000000000", OibError::Checksum)]
    fn test_invalid_oibs(#[case] oib: &str, #[case] expected: OibError) {
        assert_eq!(validate_oib(oib), Err(expected));
    }

    #[test]
    fn test_non_ascii_digits_count_as_characters() {
        // Eleven characters, one of them a two-byte letter
        assert_eq!(validate_oib("1234567890Ž"), Err(OibError::Charset));
    }

    #[test]
    fn test_check_digit() {
        assert_eq!(oib_check_digit("0000000000"), Some(1));
        assert_eq!(oib_check_digit("1234567890"), Some(3));
        assert_eq!(oib_check_digit("123456789"), None);
        assert_eq!(oib_check_digit("12345678x0"), None);
    }

    #[test]
    fn test_check_report_serialization() {
        let ok = serde_json::to_value(check_oib("12345678903")).unwrap();
        assert_eq!(ok, serde_json::json!({ "valid": true }));

        let bad = serde_json::to_value(check_oib("123")).unwrap();
        assert_eq!(bad, serde_json::json!({ "valid": false, "reason": "length" }));

        assert_eq!(check_oib("1234567890A").reason.map(|r| r.reason()), Some("charset"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            OibError::Checksum.message_hr(),
            "OIB nije ispravan (pogrešna kontrolna znamenka)"
        );
        assert_eq!(OibError::Length.to_string(), "OIB must contain exactly 11 digits");
    }

    #[test]
    fn test_format_oib() {
        assert_eq!(format_oib("123-456 789.03"), "12345678903");
        assert_eq!(format_oib("1234567890312345"), "12345678903");
        assert_eq!(format_oib("abc"), "");
    }

    #[test]
    fn test_oib_newtype() {
        let oib = Oib::from_str("12345678903").unwrap();
        assert_eq!(oib.as_str(), "12345678903");
        assert_eq!(oib.check_digit(), 3);

        let err = Oib::from_str("12345678904").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidOib {
                oib: "12345678904".to_string(),
                reason: OibError::Checksum
            }
        );

        let json = serde_json::to_string(&oib).unwrap();
        assert_eq!(json, r#""12345678903""#);
        assert!(serde_json::from_str::<Oib>(r#""1234""#).is_err());
    }
}
