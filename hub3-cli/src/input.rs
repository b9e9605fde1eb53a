//! Reading JSON documents from a file or standard input

use crate::error::Result;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read the whole input. `None` or `-` means standard input.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!("Reading input from {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            debug!("Reading input from stdin");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Read and deserialize a JSON document
pub fn read_json<T: DeserializeOwned>(path: Option<&Path>) -> Result<T> {
    let text = read_input(path)?;
    Ok(serde_json::from_str(&text)?)
}
