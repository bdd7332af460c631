//! Profile Codec Error Types

use thiserror::Error;

/// Errors surfaced by profile import
///
/// Out-of-range band indices are deliberately NOT represented here: both
/// the text grammar and the state store drop them silently, and callers
/// rely on that lenient contract.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Structurally valid JSON that is not a profile (format error)
    #[error("profile JSON is missing the required `bands` field")]
    MissingBands,

    /// Malformed JSON document (parse error)
    #[error("failed to parse profile JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Input matches neither the JSON schema nor the filter-list grammar
    #[error("content is neither a JSON profile nor a filter list")]
    UnrecognizedFormat,
}
