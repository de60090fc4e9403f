use thiserror::Error;

/// Contract-level payload failures.
///
/// Data-quality problems (a malformed fare entry, an unparseable price, a day
/// with no valid fares) are never errors; they are dropped during
/// normalization or represented as explicit empty states. `PayloadError` is
/// reserved for caller bugs: handing the decode helpers something that is
/// fundamentally not the collection shape they were promised.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("expected a JSON array of {expected}, got {found}")]
    NotACollection { expected: &'static str, found: &'static str },
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
