use crate::error::Result;
use crate::input::read_json;
use crate::output::{print_payload, OutputFormat};
use clap::Args;
use hub3_codec::{encode_with, PaymentRecord, ValidationPolicy};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Payment record JSON file (`-` or omitted reads stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Fold Croatian diacritics to ASCII in the printed payload
    #[arg(long)]
    pub ascii: bool,
}

#[derive(Debug, Serialize)]
pub struct EncodeResponse {
    pub payload: String,
    pub lines: Vec<String>,
    pub transliterated: bool,
}

/// Validate and encode a record
pub fn execute(
    record: &PaymentRecord,
    ascii: bool,
    policy: &ValidationPolicy,
) -> Result<EncodeResponse> {
    let encoded = encode_with(record, policy)?;
    let payload = if ascii {
        encoded.transliterated()
    } else {
        encoded.into_string()
    };

    Ok(EncodeResponse {
        lines: payload.split_terminator('\n').map(str::to_string).collect(),
        payload,
        transliterated: ascii,
    })
}

pub fn handle(args: &EncodeArgs, format: OutputFormat, policy: &ValidationPolicy) -> Result<()> {
    let record: PaymentRecord = read_json(args.input.as_deref())?;
    let response = execute(&record, args.ascii, policy)?;
    info!(
        "Encoded payload for {} ({} bytes)",
        record.receiver_name,
        response.payload.len()
    );
    print_payload(format, &response.payload, &response);
    Ok(())
}
