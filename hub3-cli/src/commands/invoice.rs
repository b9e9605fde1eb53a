use crate::error::{Error, Result};
use crate::input::read_json;
use crate::output::{print_payload, OutputFormat};
use clap::Args;
use hub3_codec::invoice::{InvoiceParty, DEFAULT_PAYMENT_MODEL};
use hub3_codec::{encode_with, Invoice, PaymentRecord, ValidationPolicy};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug)]
pub struct InvoiceArgs {
    /// Invoice JSON file (`-` or omitted reads stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Payment model
    #[arg(short, long, default_value = DEFAULT_PAYMENT_MODEL)]
    pub model: String,
    /// Purpose code, e.g. OTHR
    #[arg(short, long)]
    pub purpose: Option<String>,
    /// Fold Croatian diacritics to ASCII in the printed payload
    #[arg(long)]
    pub ascii: bool,
}

#[derive(Debug, Serialize)]
pub struct OibWarning {
    pub party: InvoiceParty,
    pub reason: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub total: String,
    pub record: PaymentRecord,
    pub payload: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub oib_warnings: Vec<OibWarning>,
}

/// Convert an invoice to a payment record and encode it.
///
/// Missing invoice data fails the conversion; a bad OIB only warns since
/// OIBs are not part of the payload.
pub fn execute(
    invoice: &Invoice,
    model: &str,
    purpose: Option<&str>,
    ascii: bool,
    policy: &ValidationPolicy,
) -> Result<InvoiceResponse> {
    let missing = invoice.missing_fields();
    if !missing.is_empty() {
        return Err(Error::IncompleteInvoice(
            missing.iter().map(|field| field.label_hr()).collect(),
        ));
    }

    let oib_warnings: Vec<OibWarning> = invoice
        .check_oibs()
        .into_iter()
        .map(|(party, error)| {
            warn!("Invoice {} has an invalid {:?} OIB: {}", invoice.invoice_number, party, error);
            OibWarning {
                party,
                reason: error.reason(),
                message: error.message_hr(),
            }
        })
        .collect();

    let record = invoice.to_payment_record(model, purpose.unwrap_or_default())?;
    let encoded = encode_with(&record, policy)?;
    let payload = if ascii {
        encoded.transliterated()
    } else {
        encoded.into_string()
    };

    Ok(InvoiceResponse {
        total: record.amount.format_display(),
        record,
        payload,
        oib_warnings,
    })
}

pub fn handle(args: &InvoiceArgs, format: OutputFormat, policy: &ValidationPolicy) -> Result<()> {
    let invoice: Invoice = read_json(args.input.as_deref())?;
    let response = execute(
        &invoice,
        &args.model,
        args.purpose.as_deref(),
        args.ascii,
        policy,
    )?;
    info!(
        "Encoded invoice {} for {} EUR",
        invoice.invoice_number, response.total
    );
    print_payload(format, &response.payload, &response);
    Ok(())
}
