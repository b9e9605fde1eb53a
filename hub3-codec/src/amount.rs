//! Money as integer minor units
//!
//! Amounts are carried as cents from form input to payload. Display text is
//! produced and read with integer arithmetic only.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount in minor currency units (euro cents)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MinorUnits(u64);

impl MinorUnits {
    pub const ZERO: MinorUnits = MinorUnits(0);

    pub const fn new(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Number of decimal digits in the minor-unit value
    pub fn digit_count(&self) -> usize {
        self.0.to_string().len()
    }

    /// Render for display with a comma separator and two decimals: 3900 → "39,00"
    pub fn format_display(&self) -> String {
        format!("{},{:02}", self.0 / 100, self.0 % 100)
    }

    /// Read an amount typed into a form field.
    ///
    /// Everything except digits and commas is dropped. With a comma the text
    /// is euros and cents ("39,5" → 3950, extra decimals are cut); without
    /// one it is whole euros ("39" → 3900). Anything after a second comma is
    /// ignored. Empty input is zero.
    pub fn parse_display(text: &str) -> Result<Self> {
        let cleaned: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == ',')
            .collect();

        let (whole, cents) = match cleaned.split_once(',') {
            Some((whole, decimals)) => {
                // Only the group after the first comma holds cents.
                let decimals: String = decimals
                    .split(',')
                    .next()
                    .unwrap_or_default()
                    .chars()
                    .chain(std::iter::repeat('0'))
                    .take(2)
                    .collect();
                (whole, parse_digits(&decimals, text)?)
            }
            None => (cleaned.as_str(), 0),
        };

        let whole = parse_digits(whole, text)?;
        whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(cents))
            .map(Self)
            .ok_or_else(|| Error::AmountOverflow(text.to_string()))
    }

    pub fn checked_add(self, other: MinorUnits) -> Option<MinorUnits> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_mul(self, factor: u64) -> Option<MinorUnits> {
        self.0.checked_mul(factor).map(Self)
    }
}

fn parse_digits(digits: &str, original: &str) -> Result<u64> {
    if digits.is_empty() {
        return Ok(0);
    }
    digits.parse::<u64>().map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow => Error::AmountOverflow(original.to_string()),
        _ => Error::InvalidAmount(original.to_string()),
    })
}

impl From<u64> for MinorUnits {
    fn from(cents: u64) -> Self {
        Self(cents)
    }
}

impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3900, "39,00")]
    #[case(5, "0,05")]
    #[case(0, "0,00")]
    #[case(123456, "1234,56")]
    fn test_format_display(#[case] cents: u64, #[case] expected: &str) {
        assert_eq!(MinorUnits::new(cents).format_display(), expected);
    }

    #[rstest]
    #[case("39,00", 3900)]
    #[case("39,5", 3950)]
    #[case("39,567", 3956)]
    #[case("39", 3900)]
    #[case("3900", 390000)]
    #[case("1.234,56 EUR", 123456)]
    #[case(",99", 99)]
    #[case("", 0)]
    #[case("12,", 1200)]
    #[case("39,5,7", 3950)]
    #[case("1,2,34", 120)]
    fn test_parse_display(#[case] text: &str, #[case] expected: u64) {
        assert_eq!(MinorUnits::parse_display(text).unwrap(), MinorUnits::new(expected));
    }

    #[test]
    fn test_parse_display_overflow() {
        assert!(matches!(
            MinorUnits::parse_display("999999999999999999999"),
            Err(Error::AmountOverflow(_))
        ));
        assert!(matches!(
            MinorUnits::parse_display("184467440737095517"),
            Err(Error::AmountOverflow(_))
        ));
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = MinorUnits::new(1950);
        assert_eq!(a.checked_mul(2), Some(MinorUnits::new(3900)));
        assert_eq!(a.checked_add(MinorUnits::new(50)), Some(MinorUnits::new(2000)));
        assert_eq!(MinorUnits::new(u64::MAX).checked_add(MinorUnits::new(1)), None);
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(MinorUnits::new(3900).digit_count(), 4);
        assert_eq!(MinorUnits::ZERO.digit_count(), 1);
        assert_eq!(MinorUnits::new(u64::MAX).digit_count(), 20);
    }

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&MinorUnits::new(3900)).unwrap(), "3900");
        let parsed: MinorUnits = serde_json::from_str("3900").unwrap();
        assert_eq!(parsed.cents(), 3900);
    }
}
