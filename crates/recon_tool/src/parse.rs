//! Parse errors and JSON decoding shared by tool parsers.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Error decoding a tool's raw output
#[derive(Debug, Error)]
pub enum ParseError {
    /// Output is not valid JSON or does not match the tool's schema
    #[error("Malformed tool output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Strictly decode a JSON document.
///
/// Trailing content after the document is rejected.
///
/// # Errors
///
/// Returns `ParseError::Json` wrapping the decoder error
pub fn decode_json<T: DeserializeOwned>(raw: &str) -> Result<T, ParseError> {
    Ok(serde_json::from_str(raw)?)
}
