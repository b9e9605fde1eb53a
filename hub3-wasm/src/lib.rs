//! WebAssembly bindings for the HUB-3 payment payload codec.
//!
//! The browser form hands plain JS objects in the `PaymentRecord` and
//! `Invoice` JSON shapes; the bindings validate them and return the payload
//! string for a PDF417 drawing library.

use hub3_codec::codes::{PurposeCode, PAYMENT_MODELS, PURPOSE_CODES};
use hub3_codec::{
    charset, encode_with, Invoice, MinorUnits, PaymentRecord, ValidationOutcome,
    ValidationPolicy,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set up panic hook for better error messages when debugging in browser
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}

/// One violation as shown next to the form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationView {
    pub tag: String,
    pub field: String,
    pub message: String,
}

/// Validation result handed back to JavaScript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationView {
    pub valid: bool,
    pub violations: Vec<ViolationView>,
}

impl From<&ValidationOutcome> for ValidationView {
    fn from(outcome: &ValidationOutcome) -> Self {
        Self {
            valid: outcome.is_valid(),
            violations: outcome
                .iter()
                .map(|v| ViolationView {
                    tag: v.tag(),
                    field: v.field().to_string(),
                    message: v.message_hr(),
                })
                .collect(),
        }
    }
}

/// Resolve a policy name; `None` is the default policy
pub fn policy_by_name(name: Option<&str>) -> Result<ValidationPolicy, String> {
    match name {
        None | Some("default") => Ok(ValidationPolicy::default()),
        Some("lenient") => Ok(ValidationPolicy::lenient()),
        Some("strict") => Ok(ValidationPolicy::strict()),
        Some(other) => Err(format!("Unknown validation policy: {}", other)),
    }
}

/// Encode a record, optionally folding diacritics to ASCII
pub fn encode_record(
    record: &PaymentRecord,
    policy: &ValidationPolicy,
    ascii: bool,
) -> Result<String, String> {
    let payload = encode_with(record, policy).map_err(|e| e.to_string())?;
    Ok(if ascii {
        payload.transliterated()
    } else {
        payload.into_string()
    })
}

/// Convert an invoice to a record and encode it
pub fn encode_invoice(
    invoice: &Invoice,
    model: &str,
    purpose: Option<&str>,
    ascii: bool,
) -> Result<String, String> {
    let missing = invoice.missing_fields();
    if !missing.is_empty() {
        let labels: Vec<String> = missing.iter().map(|f| f.label_hr()).collect();
        return Err(format!("Nedostaju obavezni podaci: {}", labels.join(", ")));
    }
    let record = invoice
        .to_payment_record(model, purpose.unwrap_or_default())
        .map_err(|e| e.to_string())?;
    encode_record(&record, &ValidationPolicy::default(), ascii)
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse {}: {}", what, e)))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

/// Validate a payment record object; returns `{ valid, violations }`
#[wasm_bindgen(js_name = validatePaymentRecord)]
pub fn validate_payment_record(
    record: JsValue,
    policy: Option<String>,
) -> Result<JsValue, JsValue> {
    let record: PaymentRecord = from_js(record, "payment record")?;
    let policy = policy_by_name(policy.as_deref()).map_err(|e| JsValue::from_str(&e))?;
    let outcome = hub3_codec::validate_with(&record, &policy);
    to_js(&ValidationView::from(&outcome))
}

/// Encode a payment record object into the barcode payload
#[wasm_bindgen(js_name = encodePaymentRecord)]
pub fn encode_payment_record(
    record: JsValue,
    policy: Option<String>,
    ascii: bool,
) -> Result<String, JsValue> {
    let record: PaymentRecord = from_js(record, "payment record")?;
    let policy = policy_by_name(policy.as_deref()).map_err(|e| JsValue::from_str(&e))?;
    encode_record(&record, &policy, ascii).map_err(|e| JsValue::from_str(&e))
}

/// Encode the payment barcode payload for an invoice object
#[wasm_bindgen(js_name = encodeInvoice)]
pub fn encode_invoice_js(
    invoice: JsValue,
    model: String,
    purpose: Option<String>,
    ascii: bool,
) -> Result<String, JsValue> {
    let invoice: Invoice = from_js(invoice, "invoice")?;
    encode_invoice(&invoice, &model, purpose.as_deref(), ascii).map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen(js_name = validateIban)]
pub fn validate_iban(iban: &str) -> bool {
    hub3_ident::validate_iban(iban)
}

/// Check an OIB; returns `{ valid, reason? }`
#[wasm_bindgen(js_name = validateOib)]
pub fn validate_oib(oib: &str) -> Result<JsValue, JsValue> {
    to_js(&hub3_ident::check_oib(oib))
}

/// Input mask for the OIB field: digits only, at most 11
#[wasm_bindgen(js_name = formatOib)]
pub fn format_oib(value: &str) -> String {
    hub3_ident::format_oib(value)
}

/// Encoded length in payload units, `undefined` for unsupported characters
#[wasm_bindgen(js_name = payloadLength)]
pub fn payload_length(text: &str) -> Option<u32> {
    charset::payload_length(text).and_then(|units| u32::try_from(units).ok())
}

/// Cents to display text, e.g. 3900n -> "39,00"
#[wasm_bindgen(js_name = formatAmount)]
pub fn format_amount(cents: u64) -> String {
    MinorUnits::new(cents).format_display()
}

/// Display text to cents, e.g. "39,00" -> 3900n
#[wasm_bindgen(js_name = parseAmount)]
pub fn parse_amount(text: &str) -> Result<u64, JsValue> {
    MinorUnits::parse_display(text)
        .map(|amount| amount.cents())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Accepted payment models, for the model drop-down
#[wasm_bindgen(js_name = paymentModels)]
pub fn payment_models() -> Result<JsValue, JsValue> {
    to_js(&PAYMENT_MODELS)
}

/// Purpose codes with their Croatian titles, for the purpose drop-down
#[wasm_bindgen(js_name = purposeCodes)]
pub fn purpose_codes() -> Result<JsValue, JsValue> {
    let codes: Vec<&PurposeCode> = PURPOSE_CODES.iter().collect();
    to_js(&codes)
}
