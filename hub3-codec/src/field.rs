//! Payment fields and their encoding rules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum payload units for names, addresses and cities
pub const MAX_PARTY_UNITS: usize = 30;

/// Maximum payload units for the payment description
pub const MAX_DESCRIPTION_UNITS: usize = 35;

/// Width of the zero-padded amount line
pub const AMOUNT_WIDTH: usize = 15;

/// Semantic type of a payment field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Free text in the HUB-3 alphabet
    Text,
    /// Integer amount in minor currency units
    MinorUnits,
    /// Value drawn from a code list or checked by an identifier algorithm
    Coded,
}

/// One of the fixed set of HUB-3 payment fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentField {
    Iban,
    ReceiverName,
    Amount,
    PaymentDescription,
    PayerName,
    PayerAddress,
    PayerCity,
    ReceiverAddress,
    ReceiverCity,
    PaymentModel,
    ReferenceNumber,
    PurposeCode,
}

impl PaymentField {
    /// Every field, in declaration order
    pub const ALL: [PaymentField; 12] = [
        Self::Iban,
        Self::ReceiverName,
        Self::Amount,
        Self::PaymentDescription,
        Self::PayerName,
        Self::PayerAddress,
        Self::PayerCity,
        Self::ReceiverAddress,
        Self::ReceiverCity,
        Self::PaymentModel,
        Self::ReferenceNumber,
        Self::PurposeCode,
    ];

    /// Fields in the order their lines appear in the payload, after the
    /// header and currency lines
    pub const PAYLOAD_ORDER: [PaymentField; 12] = [
        Self::Amount,
        Self::PayerName,
        Self::PayerAddress,
        Self::PayerCity,
        Self::ReceiverName,
        Self::ReceiverAddress,
        Self::ReceiverCity,
        Self::Iban,
        Self::PaymentModel,
        Self::ReferenceNumber,
        Self::PurposeCode,
        Self::PaymentDescription,
    ];

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Amount => FieldKind::MinorUnits,
            Self::Iban | Self::PaymentModel | Self::ReferenceNumber | Self::PurposeCode => {
                FieldKind::Coded
            }
            _ => FieldKind::Text,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Self::Iban
                | Self::ReceiverName
                | Self::Amount
                | Self::PaymentDescription
                | Self::PaymentModel
                | Self::ReferenceNumber
        )
    }

    /// Maximum encoded length in payload units, for length-limited fields
    pub fn max_units(&self) -> Option<usize> {
        match self {
            Self::Amount => Some(AMOUNT_WIDTH),
            Self::PaymentDescription => Some(MAX_DESCRIPTION_UNITS),
            Self::PayerName
            | Self::PayerAddress
            | Self::PayerCity
            | Self::ReceiverName
            | Self::ReceiverAddress
            | Self::ReceiverCity => Some(MAX_PARTY_UNITS),
            Self::Iban | Self::PaymentModel | Self::ReferenceNumber | Self::PurposeCode => None,
        }
    }

    /// Stable kebab-case name, used in violation tags
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Iban => "iban",
            Self::ReceiverName => "receiver-name",
            Self::Amount => "amount",
            Self::PaymentDescription => "payment-description",
            Self::PayerName => "payer-name",
            Self::PayerAddress => "payer-address",
            Self::PayerCity => "payer-city",
            Self::ReceiverAddress => "receiver-address",
            Self::ReceiverCity => "receiver-city",
            Self::PaymentModel => "payment-model",
            Self::ReferenceNumber => "reference-number",
            Self::PurposeCode => "purpose-code",
        }
    }

    /// Croatian form label
    pub fn label_hr(&self) -> &'static str {
        match self {
            Self::Iban => "Broj bankovnog računa (IBAN)",
            Self::ReceiverName => "Naziv primatelja plaćanja",
            Self::Amount => "Iznos plaćanja",
            Self::PaymentDescription => "Opis plaćanja",
            Self::PayerName => "Ime platitelja",
            Self::PayerAddress => "Adresa platitelja",
            Self::PayerCity => "Sjedište platitelja",
            Self::ReceiverAddress => "Adresa primatelja",
            Self::ReceiverCity => "Sjedište primatelja",
            Self::PaymentModel => "Model plaćanja",
            Self::ReferenceNumber => "Poziv na broj",
            Self::PurposeCode => "Šifra namjene",
        }
    }
}

impl fmt::Display for PaymentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
