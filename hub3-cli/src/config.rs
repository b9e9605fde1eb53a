//! Output format and validation policy selected on the command line

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use hub3_codec::ValidationPolicy;

/// Policy names accepted by `--policy` and `HUB3_POLICY`
pub const POLICY_NAMES: [&str; 3] = ["default", "lenient", "strict"];

/// Resolve a policy name to its rule switches
pub fn parse_policy(name: &str) -> Result<ValidationPolicy> {
    match name.to_lowercase().as_str() {
        "default" => Ok(ValidationPolicy::default()),
        "lenient" => Ok(ValidationPolicy::lenient()),
        "strict" => Ok(ValidationPolicy::strict()),
        _ => Err(Error::UnknownPolicy(name.to_string())),
    }
}

/// Resolved global options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub policy: ValidationPolicy,
}

impl Settings {
    /// Resolve the `--format` and `--policy` names; either one being unknown
    /// is an error
    pub fn resolve(format: &str, policy: &str) -> Result<Self> {
        Ok(Self {
            format: format.parse()?,
            policy: parse_policy(policy)?,
        })
    }
}
