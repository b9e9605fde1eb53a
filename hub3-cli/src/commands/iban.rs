use crate::error::{Error, Result};
use crate::output::{print_success, OutputFormat};
use clap::Args;
use hub3_ident::Iban;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct IbanArgs {
    /// IBAN to check, without spaces
    pub iban: String,
}

#[derive(Debug, Serialize)]
pub struct IbanResponse {
    pub iban: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_digits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

pub fn execute(iban: &str) -> IbanResponse {
    match Iban::new(iban) {
        Ok(parsed) => IbanResponse {
            iban: parsed.as_str().to_string(),
            valid: true,
            country_code: Some(parsed.country_code().to_string()),
            check_digits: Some(parsed.check_digits().to_string()),
            bban: Some(parsed.bban().to_string()),
            reason: None,
        },
        Err(e) => IbanResponse {
            iban: iban.to_string(),
            valid: false,
            country_code: None,
            check_digits: None,
            bban: None,
            reason: Some(e.to_string()),
        },
    }
}

pub fn handle(args: &IbanArgs, format: OutputFormat) -> Result<()> {
    let response = execute(&args.iban);
    print_success(format, &response);

    if response.valid {
        Ok(())
    } else {
        Err(Error::InvalidIban(args.iban.clone()))
    }
}
