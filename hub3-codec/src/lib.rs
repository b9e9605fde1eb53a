//! # HUB-3 Payment Payload Codec
//!
//! This crate validates Croatian domestic payment data and serializes it into
//! the HUB-3 text payload that is printed as a PDF417 barcode on payment
//! slips and invoices.
//!
//! ## Features
//!
//! - Payload-unit length accounting for the HUB-3 alphabet
//! - Validation that reports every violated rule at once
//! - Byte-exact, positional payload serialization
//! - Payment model and purpose code lists
//! - Integer minor-unit amounts, never floating point
//! - Invoice to payment record conversion
//! - A renderer seam for PDF417 drawing backends
//!
//! ## Example Usage
//!
//! ```rust
//! use hub3_codec::{encode, validate, PaymentRecord};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let record = PaymentRecord::builder()
//!     .iban("HR1210010051863000160")
//!     .receiver_name("Obrt Primjer")
//!     .amount(3900)
//!     .payment_description("Usluga")
//!     .payment_model("00")
//!     .reference_number("12345")
//!     .build();
//!
//! assert!(validate(&record).is_valid());
//!
//! let payload = encode(&record)?;
//! assert!(payload.as_str().starts_with("HRVHUB30\nEUR\n000000000003900\n"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod amount;
pub mod charset;
pub mod codes;
pub mod error;
pub mod field;
pub mod invoice;
pub mod payload;
pub mod record;
pub mod render;
pub mod validation;

// Re-export main types for convenience
pub use amount::MinorUnits;
pub use charset::payload_length;
pub use error::{Error, Result};
pub use field::{FieldKind, PaymentField};
pub use invoice::{Invoice, InvoiceItem};
pub use payload::{encode, encode_with, EncodedPayload};
pub use record::{PaymentRecord, PaymentRecordBuilder};
pub use render::{render_record, RenderOptions, SymbolRenderer};
pub use validation::{validate, validate_with, ValidationOutcome, ValidationPolicy, Violation};

pub use hub3_ident::{check_oib, validate_iban, validate_oib, OibCheck, OibError};
