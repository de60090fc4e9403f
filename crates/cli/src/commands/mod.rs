pub mod anywhere;
pub mod series;
pub mod summary;
pub mod tariffs;

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use farescan_core::{DayRecord, PayloadError};

/// Outcome of one subcommand: the process exit code and the JSON document
/// printed to stdout.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandFailure<'a> {
    command: &'a str,
    status: &'a str,
    error_class: &'a str,
    message: String,
}

impl CommandResult {
    pub fn success(payload: impl Serialize) -> Self {
        match serde_json::to_string_pretty(&payload) {
            Ok(output) => Self { exit_code: 0, output },
            Err(error) => Self::failure("unknown", "serialization", error.to_string()),
        }
    }

    pub fn failure(command: &str, error_class: &str, message: impl Into<String>) -> Self {
        let payload = CommandFailure {
            command,
            status: "error",
            error_class,
            message: message.into(),
        };
        let output = serde_json::to_string(&payload).unwrap_or_else(|error| {
            format!("{{\"status\":\"error\",\"message\":\"{error}\"}}")
        });
        Self { exit_code: 2, output }
    }
}

/// Read a payload file and parse it as JSON. Both steps are caller-side
/// problems when they fail, so they map to failure results rather than
/// panics.
pub(crate) fn load_payload(command: &str, path: &Path) -> Result<Value, CommandResult> {
    let text = fs::read_to_string(path).map_err(|error| {
        CommandResult::failure(
            command,
            "payload_read",
            format!("could not read `{}`: {error}", path.display()),
        )
    })?;
    serde_json::from_str(&text).map_err(|error| {
        CommandResult::failure(
            command,
            "payload_json",
            format!("`{}` is not valid JSON: {error}", path.display()),
        )
    })
}

pub(crate) fn decode_day_records(command: &str, value: &Value) -> Result<Vec<DayRecord>, CommandResult> {
    farescan_core::decode_days(value).map_err(|error: PayloadError| {
        CommandResult::failure(command, "payload_shape", error.to_string())
    })
}
