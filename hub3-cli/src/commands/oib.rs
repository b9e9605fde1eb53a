use crate::error::{Error, Result};
use crate::output::{print_success, OutputFormat};
use clap::Args;
use hub3_ident::{check_oib, format_oib, OibCheck};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct OibArgs {
    /// OIB to check
    pub oib: String,
    /// Strip separators and other non-digits before checking
    #[arg(long)]
    pub clean: bool,
}

#[derive(Debug, Serialize)]
pub struct OibResponse {
    pub oib: String,
    #[serde(flatten)]
    pub check: OibCheck,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

pub fn execute(oib: &str, clean: bool) -> OibResponse {
    let oib = if clean { format_oib(oib) } else { oib.to_string() };
    let check = check_oib(&oib);
    OibResponse {
        message: check.reason.map(|reason| reason.message_hr()),
        oib,
        check,
    }
}

pub fn handle(args: &OibArgs, format: OutputFormat) -> Result<()> {
    let response = execute(&args.oib, args.clean);
    print_success(format, &response);

    match response.check.reason {
        None => Ok(()),
        Some(reason) => Err(Error::InvalidOib {
            oib: response.oib,
            reason,
        }),
    }
}
