//! Invoice data and its conversion into a payment record
//!
//! An invoice carries the seller (the business issuing it), the customer and
//! a list of items. The barcode printed on the invoice pays its total to the
//! seller's IBAN.

use crate::amount::MinorUnits;
use crate::error::{Error, Result};
use crate::record::PaymentRecord;
use hub3_ident::{validate_oib, OibError};
use serde::{Deserialize, Serialize};

/// Payment description used when an invoice has no items
pub const FALLBACK_DESCRIPTION: &str = "N/A";

/// Payment model used when the caller does not pick one
pub const DEFAULT_PAYMENT_MODEL: &str = "00";

/// One invoice line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: MinorUnits,
}

impl InvoiceItem {
    pub fn new(description: impl Into<String>, quantity: u32, unit_price: MinorUnits) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// Line total, `None` on overflow
    pub fn total(&self) -> Option<MinorUnits> {
        self.unit_price.checked_mul(u64::from(self.quantity))
    }
}

/// Invoice data needed for the payment barcode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    pub seller_name: String,
    pub seller_address: String,
    pub seller_city: String,
    pub seller_oib: String,
    pub seller_iban: String,

    pub customer_name: String,
    pub customer_address: String,
    pub customer_city: String,
    pub customer_oib: String,

    /// Invoice number, e.g. "1-1-25"; used as the reference number
    pub invoice_number: String,
    /// Reference number used when the invoice number is empty
    pub reference_number: String,

    pub items: Vec<InvoiceItem>,
}

/// A required piece of invoice data that is missing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "field", rename_all = "kebab-case")]
pub enum MissingInvoiceField {
    SellerName,
    SellerIban,
    InvoiceNumber,
    Items,
    ItemDescription { item: usize },
    ItemQuantity { item: usize },
    ItemUnitPrice { item: usize },
}

impl MissingInvoiceField {
    /// Croatian label, as listed in the form's error message
    pub fn label_hr(&self) -> String {
        match self {
            Self::SellerName => "Naziv obrta".to_string(),
            Self::SellerIban => "Broj računa obrta".to_string(),
            Self::InvoiceNumber => "Broj računa".to_string(),
            Self::Items => "Stavke računa".to_string(),
            Self::ItemDescription { item } => format!("Stavka {}: Naziv robe/usluge", item),
            Self::ItemQuantity { item } => format!("Stavka {}: Količina", item),
            Self::ItemUnitPrice { item } => format!("Stavka {}: Cijena po jedinici", item),
        }
    }
}

/// Which party an OIB belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvoiceParty {
    Seller,
    Customer,
}

impl Invoice {
    /// Sum of all line totals
    pub fn total(&self) -> Result<MinorUnits> {
        self.items.iter().try_fold(MinorUnits::ZERO, |sum, item| {
            item.total()
                .and_then(|line| sum.checked_add(line))
                .ok_or_else(|| Error::AmountOverflow(format!("invoice {}", self.invoice_number)))
        })
    }

    /// Required invoice data that is missing. Items are numbered from 1.
    ///
    /// Without items only [`MissingInvoiceField::Items`] is reported.
    pub fn missing_fields(&self) -> Vec<MissingInvoiceField> {
        if self.items.is_empty() {
            return vec![MissingInvoiceField::Items];
        }

        let mut missing = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            let item_no = index + 1;
            if item.description.trim().is_empty() {
                missing.push(MissingInvoiceField::ItemDescription { item: item_no });
            }
            if item.quantity == 0 {
                missing.push(MissingInvoiceField::ItemQuantity { item: item_no });
            }
            if item.unit_price == MinorUnits::ZERO {
                missing.push(MissingInvoiceField::ItemUnitPrice { item: item_no });
            }
        }

        if self.seller_name.is_empty() {
            missing.push(MissingInvoiceField::SellerName);
        }
        if self.seller_iban.is_empty() {
            missing.push(MissingInvoiceField::SellerIban);
        }
        if self.invoice_number.is_empty() {
            missing.push(MissingInvoiceField::InvoiceNumber);
        }
        missing
    }

    /// Check the seller and customer OIBs that are filled in
    pub fn check_oibs(&self) -> Vec<(InvoiceParty, OibError)> {
        [
            (InvoiceParty::Seller, &self.seller_oib),
            (InvoiceParty::Customer, &self.customer_oib),
        ]
        .into_iter()
        .filter(|(_, oib)| !oib.is_empty())
        .filter_map(|(party, oib)| validate_oib(oib).err().map(|e| (party, e)))
        .collect()
    }

    /// Build the payment record for this invoice's barcode.
    ///
    /// The seller is the receiver and the customer the payer. The amount is
    /// the invoice total; the description is the first item's. An empty
    /// purpose code is left out.
    pub fn to_payment_record(
        &self,
        payment_model: &str,
        purpose_code: &str,
    ) -> Result<PaymentRecord> {
        let description = self
            .items
            .first()
            .map(|item| item.description.clone())
            .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string());

        let reference_number = if self.invoice_number.is_empty() {
            self.reference_number.clone()
        } else {
            self.invoice_number.clone()
        };

        Ok(PaymentRecord {
            iban: self.seller_iban.clone(),
            receiver_name: self.seller_name.clone(),
            amount: self.total()?,
            payment_description: description,
            payment_model: payment_model.to_string(),
            reference_number,
            payer_name: non_empty(&self.customer_name),
            payer_address: non_empty(&self.customer_address),
            payer_city: non_empty(&self.customer_city),
            receiver_address: non_empty(&self.seller_address),
            receiver_city: non_empty(&self.seller_city),
            purpose_code: non_empty(purpose_code),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
