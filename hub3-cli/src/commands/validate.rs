use crate::error::{Error, Result};
use crate::input::read_json;
use crate::output::{print_success, OutputFormat};
use clap::Args;
use hub3_codec::{validate_with, PaymentRecord, ValidationOutcome, ValidationPolicy};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Payment record JSON file (`-` or omitted reads stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct ViolationReport {
    pub tag: String,
    pub field: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub violations: Vec<ViolationReport>,
}

impl From<&ValidationOutcome> for ValidateResponse {
    fn from(outcome: &ValidationOutcome) -> Self {
        Self {
            valid: outcome.is_valid(),
            violations: outcome
                .iter()
                .map(|v| ViolationReport {
                    tag: v.tag(),
                    field: v.field().to_string(),
                    message: v.message_hr(),
                })
                .collect(),
        }
    }
}

pub fn execute(record: &PaymentRecord, policy: &ValidationPolicy) -> ValidationOutcome {
    validate_with(record, policy)
}

/// Print the report; an invalid record still fails the command
pub fn handle(args: &ValidateArgs, format: OutputFormat, policy: &ValidationPolicy) -> Result<()> {
    let record: PaymentRecord = read_json(args.input.as_deref())?;
    let outcome = execute(&record, policy);
    print_success(format, &ValidateResponse::from(&outcome));

    if outcome.is_valid() {
        Ok(())
    } else {
        Err(Error::Rejected(outcome))
    }
}
