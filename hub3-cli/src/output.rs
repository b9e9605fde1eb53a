use crate::error::Error;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write;

/// How results are written to stdout: a JSON envelope or plain lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Envelope around a successful result
#[derive(Debug, Serialize)]
struct SuccessEnvelope<T: Serialize> {
    status: &'static str,
    data: T,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    status: &'static str,
    error: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<String>,
}

/// Print a successful result in the chosen format
pub fn print_success<T: Serialize>(format: OutputFormat, data: &T) {
    match format {
        OutputFormat::Json => {
            let envelope = SuccessEnvelope {
                status: "success",
                data,
            };
            println!("{}", to_pretty_json(&envelope));
        }
        OutputFormat::Text => {
            let json = serde_json::to_value(data).unwrap_or(Value::Null);
            print!("{}", render_text(&json));
        }
    }
}

/// Print a payload verbatim in text mode, or wrapped in the JSON envelope
pub fn print_payload<T: Serialize>(format: OutputFormat, payload: &str, data: &T) {
    match format {
        OutputFormat::Json => print_success(format, data),
        // The payload already ends with its own line feed
        OutputFormat::Text => print!("{}", payload),
    }
}

/// Print an error in the chosen format.
///
/// A rejected record also lists the Croatian message of every violation.
pub fn print_error(format: OutputFormat, error: &Error) {
    let message = error.to_string();
    let details = match error {
        Error::Rejected(outcome) => outcome.messages(),
        Error::Codec(codec) => codec.outcome().map(|o| o.messages()).unwrap_or_default(),
        _ => Vec::new(),
    };

    match format {
        OutputFormat::Json => {
            let envelope = ErrorEnvelope {
                status: "error",
                error: &message,
                details,
            };
            eprintln!("{}", to_pretty_json(&envelope));
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
            for detail in details {
                eprintln!("  - {}", detail);
            }
        }
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        format!(
            "{{\"status\":\"error\",\"error\":\"Serialization failed: {}\"}}",
            e
        )
    })
}

/// Flatten a JSON value into `path: value` lines, nested keys joined with
/// `.` and array items indexed as `[n]`
pub fn render_text(value: &Value) -> String {
    let mut out = String::new();
    write_flat(&mut out, "", value);
    out
}

fn write_flat(out: &mut String, path: &str, value: &Value) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, nested) in map {
                let path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                write_flat(out, &path, nested);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, item) in items.iter().enumerate() {
                write_flat(out, &format!("{}[{}]", path, index), item);
            }
        }
        Value::Object(_) | Value::Array(_) => {
            let _ = writeln!(out, "{}: none", path);
        }
        Value::String(text) if path.is_empty() => {
            let _ = writeln!(out, "{}", text);
        }
        Value::String(text) => {
            let _ = writeln!(out, "{}: {}", path, text);
        }
        Value::Null => {
            let _ = writeln!(out, "{}:", path);
        }
        scalar if path.is_empty() => {
            let _ = writeln!(out, "{}", scalar);
        }
        scalar => {
            let _ = writeln!(out, "{}: {}", path, scalar);
        }
    }
}
