use crate::error::Result;
use crate::output::{print_success, OutputFormat};
use clap::Subcommand;
use hub3_codec::codes::{PurposeCode, PAYMENT_MODELS, PAYMENT_MODEL_PREFIX, PURPOSE_CODES};
use serde::Serialize;

#[derive(Subcommand, Debug)]
pub enum CodesCommands {
    /// List accepted payment models
    Models,
    /// List purpose codes
    Purposes {
        /// Only codes or titles containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[derive(Debug, Serialize)]
pub struct ModelListResponse {
    pub models: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct PurposeListResponse {
    pub purposes: Vec<&'static PurposeCode>,
    pub total: usize,
}

/// Payment models as they appear on the payload line, e.g. `HR00`
pub fn list_models() -> ModelListResponse {
    let models: Vec<String> = PAYMENT_MODELS
        .iter()
        .map(|model| format!("{}{}", PAYMENT_MODEL_PREFIX, model))
        .collect();
    ModelListResponse {
        total: models.len(),
        models,
    }
}

pub fn list_purposes(search: Option<&str>) -> PurposeListResponse {
    let needle = search.map(str::to_lowercase);
    let purposes: Vec<&'static PurposeCode> = PURPOSE_CODES
        .iter()
        .filter(|p| match &needle {
            Some(needle) => {
                p.code.to_lowercase().contains(needle) || p.title.to_lowercase().contains(needle)
            }
            None => true,
        })
        .collect();
    PurposeListResponse {
        total: purposes.len(),
        purposes,
    }
}

pub fn handle(cmd: &CodesCommands, format: OutputFormat) -> Result<()> {
    match cmd {
        CodesCommands::Models => print_success(format, &list_models()),
        CodesCommands::Purposes { search } => {
            print_success(format, &list_purposes(search.as_deref()))
        }
    }
    Ok(())
}
