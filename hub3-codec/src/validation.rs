//! Validation rules for payment records
//!
//! Every rule is evaluated on every call and the violations are collected
//! into a set, so a caller can show the user everything that is wrong with
//! the input at once.

use crate::charset::{is_encodable, payload_length};
use crate::codes::{is_payment_model, is_purpose_code};
use crate::field::PaymentField;
use crate::record::PaymentRecord;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Maximum payload units of a reference number under the strict policy
pub const MAX_REFERENCE_UNITS: usize = 22;

/// A single violated rule, tagged by field and kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Violation {
    /// A required field is empty
    Missing(PaymentField),
    /// Encoded length exceeds the field's limit
    TooLong(PaymentField),
    /// The field contains characters outside the HUB-3 alphabet
    InvalidChars(PaymentField),
    /// The IBAN fails the MOD-97 check or contains illegal characters
    IbanInvalid,
    /// The payment model is not in the accepted code list
    PaymentModelInvalid,
    /// The reference number is malformed (strict policy only)
    ReferenceNumberInvalid,
    /// The purpose code is not in the code list
    PurposeCodeInvalid,
}

impl Violation {
    /// Field the violation refers to
    pub fn field(&self) -> PaymentField {
        match self {
            Self::Missing(field) | Self::TooLong(field) | Self::InvalidChars(field) => *field,
            Self::IbanInvalid => PaymentField::Iban,
            Self::PaymentModelInvalid => PaymentField::PaymentModel,
            Self::ReferenceNumberInvalid => PaymentField::ReferenceNumber,
            Self::PurposeCodeInvalid => PaymentField::PurposeCode,
        }
    }

    /// Stable kebab-case tag, e.g. `amount-too-long` or `iban-invalid`
    pub fn tag(&self) -> String {
        match self {
            Self::Missing(field) => format!("missing-{}", field.tag()),
            Self::TooLong(field) => format!("{}-too-long", field.tag()),
            Self::InvalidChars(field) => format!("{}-invalid-chars", field.tag()),
            Self::IbanInvalid
            | Self::PaymentModelInvalid
            | Self::ReferenceNumberInvalid
            | Self::PurposeCodeInvalid => format!("{}-invalid", self.field().tag()),
        }
    }

    /// User-facing Croatian message
    pub fn message_hr(&self) -> String {
        use PaymentField as F;

        let text = match self {
            Self::Missing(field) => {
                return format!("Nedostaje obavezno polje: {}.", field.label_hr())
            }
            Self::TooLong(F::Amount) => "Cijena prelazi maksimalnu duljinu.",
            Self::TooLong(F::PayerName) => "Ime platitelja prelazi maksimalnu duljinu.",
            Self::TooLong(F::PayerAddress) => "Adresa platitelja prelazi maksimalnu duljinu.",
            Self::TooLong(F::PayerCity) => "Sjedište platitelja prelazi maksimalnu duljinu.",
            Self::TooLong(F::ReceiverName) => "Ime primatelja prelazi maksimalnu duljinu.",
            Self::TooLong(F::ReceiverAddress) => "Adresa primatelja prelazi maksimalnu duljinu.",
            Self::TooLong(F::ReceiverCity) => "Sjedište primatelja prelazi maksimalnu duljinu.",
            Self::TooLong(F::PaymentDescription) => "Opis plaćanja prelazi maksimalnu duljinu.",
            Self::InvalidChars(F::Amount) => "Neispravan format cijene.",
            Self::InvalidChars(F::PayerName) => "Neispravno ime platitelja.",
            Self::InvalidChars(F::PayerAddress) => "Neispravna adresa platitelja.",
            Self::InvalidChars(F::PayerCity) => "Neispravno sjedište platitelja.",
            Self::InvalidChars(F::ReceiverName) => "Neispravno ime primatelja.",
            Self::InvalidChars(F::ReceiverAddress) => "Neispravna adresa primatelja.",
            Self::InvalidChars(F::ReceiverCity) => "Neispravno sjedište primatelja.",
            Self::InvalidChars(F::PaymentDescription) => "Neispravan opis plaćanja.",
            Self::IbanInvalid => "Neispravan IBAN.",
            Self::PaymentModelInvalid => "Neispravan model plaćanja.",
            Self::ReferenceNumberInvalid => "Neispravan poziv na broj.",
            Self::PurposeCodeInvalid => "Neispravna šifra namjene.",
            Self::TooLong(field) | Self::InvalidChars(field) => {
                return format!("Neispravna vrijednost polja: {}.", field.label_hr())
            }
        };
        text.to_string()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

impl Serialize for Violation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.tag())
    }
}

/// Result of validating a payment record: the set of violated rules.
///
/// An empty set means the record is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    violations: BTreeSet<Violation>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn contains(&self, violation: &Violation) -> bool {
        self.violations.contains(violation)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Tags of every violation, in a stable order
    pub fn tags(&self) -> Vec<String> {
        self.violations.iter().map(Violation::tag).collect()
    }

    /// Croatian message for every violation, one per line in the UI
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(Violation::message_hr).collect()
    }

    fn insert(&mut self, violation: Violation) {
        self.violations.insert(violation);
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("valid");
        }
        f.write_str(&self.tags().join(", "))
    }
}

impl FromIterator<Violation> for ValidationOutcome {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationOutcome {
    type Item = Violation;
    type IntoIter = std::collections::btree_set::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

/// Switches for rules whose enforcement is a policy decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Reject purpose codes that are not in the code list
    pub purpose_codes: bool,
    /// Check reference-number format (digits, up to three hyphen-separated
    /// parts of at most 12 digits, 22 units in total)
    pub reference_numbers: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            purpose_codes: true,
            reference_numbers: false,
        }
    }
}

impl ValidationPolicy {
    /// Accept any purpose code and any reference number
    pub fn lenient() -> Self {
        Self {
            purpose_codes: false,
            reference_numbers: false,
        }
    }

    /// Enforce both the purpose-code list and the reference-number format
    pub fn strict() -> Self {
        Self {
            purpose_codes: true,
            reference_numbers: true,
        }
    }
}

/// Validate a record under the default policy
pub fn validate(record: &PaymentRecord) -> ValidationOutcome {
    validate_with(record, &ValidationPolicy::default())
}

/// Validate a record, evaluating every rule and collecting all violations
pub fn validate_with(record: &PaymentRecord, policy: &ValidationPolicy) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();

    if record.amount.digit_count() > PaymentField::Amount.max_units().unwrap_or(usize::MAX) {
        outcome.insert(Violation::TooLong(PaymentField::Amount));
    }

    for field in [PaymentField::ReceiverName, PaymentField::PaymentDescription] {
        match record.text(field) {
            Some(value) => check_text(&mut outcome, field, value),
            None => outcome.insert(Violation::Missing(field)),
        }
    }

    match record.text(PaymentField::Iban) {
        Some(iban) if !hub3_ident::validate_iban(iban) => outcome.insert(Violation::IbanInvalid),
        Some(_) => {}
        None => outcome.insert(Violation::Missing(PaymentField::Iban)),
    }

    match record.text(PaymentField::PaymentModel) {
        Some(model) if !is_payment_model(model) => {
            outcome.insert(Violation::PaymentModelInvalid)
        }
        Some(_) => {}
        None => outcome.insert(Violation::Missing(PaymentField::PaymentModel)),
    }

    // Characters outside the alphabet (a line feed above all) would shift
    // every later payload line, so this runs under every policy.
    match record.text(PaymentField::ReferenceNumber) {
        Some(reference) if !is_encodable(reference) => {
            outcome.insert(Violation::InvalidChars(PaymentField::ReferenceNumber))
        }
        Some(reference) if policy.reference_numbers && !is_reference_number(reference) => {
            outcome.insert(Violation::ReferenceNumberInvalid)
        }
        Some(_) => {}
        None => outcome.insert(Violation::Missing(PaymentField::ReferenceNumber)),
    }

    match record.text(PaymentField::PurposeCode) {
        Some(code) if !is_encodable(code) => {
            outcome.insert(Violation::InvalidChars(PaymentField::PurposeCode))
        }
        Some(code) if policy.purpose_codes && !is_purpose_code(code) => {
            outcome.insert(Violation::PurposeCodeInvalid)
        }
        _ => {}
    }

    for field in [
        PaymentField::PayerName,
        PaymentField::PayerAddress,
        PaymentField::PayerCity,
        PaymentField::ReceiverAddress,
        PaymentField::ReceiverCity,
    ] {
        if let Some(value) = record.text(field) {
            check_text(&mut outcome, field, value);
        }
    }

    if !outcome.is_valid() {
        debug!(violations = %outcome, "payment record rejected");
    }

    outcome
}

fn check_text(outcome: &mut ValidationOutcome, field: PaymentField, value: &str) {
    match payload_length(value) {
        None => outcome.insert(Violation::InvalidChars(field)),
        Some(units) if field.max_units().is_some_and(|max| units > max) => {
            outcome.insert(Violation::TooLong(field))
        }
        Some(_) => {}
    }
}

/// Reference-number format: up to three hyphen-separated groups of 1 to 12
/// digits, at most 22 characters overall
pub fn is_reference_number(reference: &str) -> bool {
    if reference.len() > MAX_REFERENCE_UNITS {
        return false;
    }
    let groups: Vec<&str> = reference.split('-').collect();
    groups.len() <= 3
        && groups
            .iter()
            .all(|g| !g.is_empty() && g.len() <= 12 && g.bytes().all(|b| b.is_ascii_digit()))
}
