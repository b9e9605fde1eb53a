use crate::error::Result;
use crate::output::{print_success, OutputFormat};
use clap::Subcommand;
use hub3_codec::MinorUnits;
use serde::Serialize;

#[derive(Subcommand, Debug)]
pub enum AmountCommands {
    /// Format cents for display, e.g. 3900 -> 39,00
    Format {
        /// Amount in cents
        cents: u64,
    },
    /// Parse a displayed amount into cents, e.g. "1.234,50" -> 123450
    Parse {
        /// Amount as typed, comma decimal separator
        text: String,
    },
}

#[derive(Debug, Serialize)]
pub struct AmountResponse {
    pub cents: MinorUnits,
    pub display: String,
}

pub fn execute(cmd: &AmountCommands) -> Result<AmountResponse> {
    let cents = match cmd {
        AmountCommands::Format { cents } => MinorUnits::new(*cents),
        AmountCommands::Parse { text } => MinorUnits::parse_display(text)?,
    };
    Ok(AmountResponse {
        cents,
        display: cents.format_display(),
    })
}

pub fn handle(cmd: &AmountCommands, format: OutputFormat) -> Result<()> {
    print_success(format, &execute(cmd)?);
    Ok(())
}
