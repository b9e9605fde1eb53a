//! HUB-3 payload serialization
//!
//! The payload is positional: a scanner finds each field by counting line
//! feeds, so the order below is part of the wire format.
//!
//! ```text
//! HRVHUB30
//! EUR
//! 000000000003900      amount, 15 digits
//! <payer name>
//! <payer address>
//! <payer city>
//! <receiver name>
//! <receiver address>
//! <receiver city>
//! <IBAN>
//! HR00                 prefix + payment model
//! <reference number>
//! <purpose code>
//! <payment description>
//! ```
//!
//! Every line, including the last, ends with a single LF.

use crate::charset::transliterate;
use crate::codes::PAYMENT_MODEL_PREFIX;
use crate::error::{Error, Result};
use crate::field::{PaymentField, AMOUNT_WIDTH};
use crate::record::PaymentRecord;
use crate::validation::{validate_with, ValidationPolicy};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Fixed header token
pub const HEADER: &str = "HRVHUB30";

/// ISO 4217 code of the local currency
pub const CURRENCY: &str = "EUR";

/// Line delimiter
pub const DELIMITER: char = '\n';

/// Number of lines in every payload
pub const LINE_COUNT: usize = 2 + PaymentField::PAYLOAD_ORDER.len();

/// A complete, validated HUB-3 payload
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EncodedPayload(String);

impl EncodedPayload {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Payload lines without their delimiters
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split_terminator(DELIMITER)
    }

    /// The payload with Croatian diacritics folded to ASCII, for renderers
    /// limited to single-byte text
    pub fn transliterated(&self) -> String {
        transliterate(&self.0)
    }
}

impl fmt::Display for EncodedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EncodedPayload {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<EncodedPayload> for String {
    fn from(payload: EncodedPayload) -> Self {
        payload.0
    }
}

/// Validate `record` under the default policy and encode it
pub fn encode(record: &PaymentRecord) -> Result<EncodedPayload> {
    encode_with(record, &ValidationPolicy::default())
}

/// Validate `record` under `policy` and encode it.
///
/// Fails with [`Error::Validation`] carrying every violation; no partial
/// payload is ever produced.
pub fn encode_with(record: &PaymentRecord, policy: &ValidationPolicy) -> Result<EncodedPayload> {
    let outcome = validate_with(record, policy);
    if !outcome.is_valid() {
        return Err(Error::Validation(outcome));
    }

    let payload = encode_unchecked(record);
    debug!(
        bytes = payload.as_str().len(),
        model = %record.payment_model,
        "encoded HUB-3 payload"
    );
    Ok(payload)
}

/// Serialize a record that has already passed validation
pub(crate) fn encode_unchecked(record: &PaymentRecord) -> EncodedPayload {
    let mut out = String::with_capacity(256);

    push_line(&mut out, HEADER);
    push_line(&mut out, CURRENCY);

    for field in PaymentField::PAYLOAD_ORDER {
        match field {
            PaymentField::Amount => {
                let amount = format!("{:0>width$}", record.amount.cents(), width = AMOUNT_WIDTH);
                push_line(&mut out, &amount);
            }
            PaymentField::PaymentModel => {
                out.push_str(PAYMENT_MODEL_PREFIX);
                push_line(&mut out, &record.payment_model);
            }
            _ => push_line(&mut out, record.text(field).unwrap_or_default()),
        }
    }

    EncodedPayload(out)
}

fn push_line(out: &mut String, value: &str) {
    out.push_str(value);
    out.push(DELIMITER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Violation;

    fn record() -> PaymentRecord {
        PaymentRecord::builder()
            .iban("HR1210010051863000160")
            .receiver_name("Obrt Primjer")
            .amount(3900)
            .payment_description("Usluga")
            .payment_model("00")
            .reference_number("12345")
            .build()
    }

    #[test]
    fn test_minimal_payload() {
        let payload = encode(&record()).unwrap();
        assert_eq!(
            payload.as_str(),
            concat!(
                "HRVHUB30\nEUR\n000000000003900\n\n\n\n",
                "Obrt Primjer\n\n\nHR1210010051863000160\n",
                "HR00\n12345\n\nUsluga\n",
            )
        );
        assert_eq!(payload.lines().count(), LINE_COUNT);
    }

    #[test]
    fn test_refuses_invalid_record() {
        let mut record = record();
        record.amount = 1_000_000_000_000_000u64.into();
        let err = encode(&record).unwrap_err();
        let outcome = err.outcome().unwrap();
        assert!(outcome.contains(&Violation::TooLong(PaymentField::Amount)));
    }

    #[test]
    fn test_transliterated() {
        let mut record = record();
        record.receiver_name = "Obrt Čavić".to_string();
        let payload = encode(&record).unwrap();
        assert!(payload.as_str().contains("Obrt Čavić\n"));
        assert!(payload.transliterated().contains("Obrt Cavic\n"));
    }
}
