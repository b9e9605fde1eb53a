//! The payment record handed over by the form layer

use crate::amount::MinorUnits;
use crate::field::PaymentField;
use serde::{Deserialize, Serialize};

/// All field values for one payment.
///
/// Optional fields holding an empty string are treated exactly like absent
/// ones, both by validation and by the encoder. Keys missing from JSON
/// input deserialize as empty and are reported by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentRecord {
    pub iban: String,
    pub receiver_name: String,
    pub amount: MinorUnits,
    pub payment_description: String,
    pub payment_model: String,
    pub reference_number: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose_code: Option<String>,
}

impl PaymentRecord {
    /// Start building a record
    pub fn builder() -> PaymentRecordBuilder {
        PaymentRecordBuilder::new()
    }

    /// Text value of a field; `None` for the amount and for absent or empty
    /// optional fields
    pub fn text(&self, field: PaymentField) -> Option<&str> {
        let value = match field {
            PaymentField::Amount => return None,
            PaymentField::Iban => Some(self.iban.as_str()),
            PaymentField::ReceiverName => Some(self.receiver_name.as_str()),
            PaymentField::PaymentDescription => Some(self.payment_description.as_str()),
            PaymentField::PaymentModel => Some(self.payment_model.as_str()),
            PaymentField::ReferenceNumber => Some(self.reference_number.as_str()),
            PaymentField::PayerName => self.payer_name.as_deref(),
            PaymentField::PayerAddress => self.payer_address.as_deref(),
            PaymentField::PayerCity => self.payer_city.as_deref(),
            PaymentField::ReceiverAddress => self.receiver_address.as_deref(),
            PaymentField::ReceiverCity => self.receiver_city.as_deref(),
            PaymentField::PurposeCode => self.purpose_code.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// Load a record from JSON
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the record to JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Builder for payment records
#[derive(Debug, Clone, Default)]
pub struct PaymentRecordBuilder {
    record: PaymentRecord,
}

impl PaymentRecordBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.record.iban = iban.into();
        self
    }

    pub fn receiver_name(mut self, name: impl Into<String>) -> Self {
        self.record.receiver_name = name.into();
        self
    }

    /// Set the amount in minor units (cents)
    pub fn amount(mut self, cents: u64) -> Self {
        self.record.amount = MinorUnits::new(cents);
        self
    }

    pub fn payment_description(mut self, description: impl Into<String>) -> Self {
        self.record.payment_description = description.into();
        self
    }

    pub fn payment_model(mut self, model: impl Into<String>) -> Self {
        self.record.payment_model = model.into();
        self
    }

    pub fn reference_number(mut self, reference: impl Into<String>) -> Self {
        self.record.reference_number = reference.into();
        self
    }

    /// Set payer name, address and city in one go
    pub fn payer(
        mut self,
        name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        self.record.payer_name = Some(name.into());
        self.record.payer_address = Some(address.into());
        self.record.payer_city = Some(city.into());
        self
    }

    pub fn payer_name(mut self, name: impl Into<String>) -> Self {
        self.record.payer_name = Some(name.into());
        self
    }

    pub fn payer_address(mut self, address: impl Into<String>) -> Self {
        self.record.payer_address = Some(address.into());
        self
    }

    pub fn payer_city(mut self, city: impl Into<String>) -> Self {
        self.record.payer_city = Some(city.into());
        self
    }

    pub fn receiver_address(mut self, address: impl Into<String>) -> Self {
        self.record.receiver_address = Some(address.into());
        self
    }

    pub fn receiver_city(mut self, city: impl Into<String>) -> Self {
        self.record.receiver_city = Some(city.into());
        self
    }

    pub fn purpose_code(mut self, code: impl Into<String>) -> Self {
        self.record.purpose_code = Some(code.into());
        self
    }

    /// Finish the record. Validation happens at encode time so that every
    /// problem can be reported at once.
    pub fn build(self) -> PaymentRecord {
        self.record
    }
}
