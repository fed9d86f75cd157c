//! Shape validation for bang lists.
//!
//! Remote sources and the local cache both hold a JSON array of
//! `{ "t": ..., "u": ... }` objects. Anything else is a [`FormatError`].

use serde_json::Value;
use thiserror::Error;

use super::{BangEntry, BangsConfig};

/// Error type for malformed bang lists.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The payload is not valid JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The payload is valid JSON but not an array.
    #[error("Expected a JSON array of bangs, got {found}")]
    NotAnArray {
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// An element of the array is not a valid bang entry.
    #[error("Invalid bang at index {index}: {reason}")]
    InvalidEntry {
        /// Position of the offending element.
        index: usize,
        /// Why the element was rejected.
        reason: String,
    },
}

/// Parses and validates a bang list from raw bytes.
///
/// # Errors
///
/// Returns [`FormatError`] if the bytes are not JSON, not an array,
/// or contain an element without string `t` and `u` fields.
pub fn parse_config(bytes: &[u8]) -> Result<BangsConfig, FormatError> {
    let value: Value = serde_json::from_slice(bytes).map_err(FormatError::InvalidJson)?;
    from_value(value)
}

/// Validates an already-parsed JSON value as a bang list.
///
/// # Errors
///
/// Returns [`FormatError`] if the value is not an array of bang entries.
pub fn from_value(value: Value) -> Result<BangsConfig, FormatError> {
    let Value::Array(items) = value else {
        return Err(FormatError::NotAnArray {
            found: json_type_name(&value),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<BangEntry>(item).map_err(|e| FormatError::InvalidEntry {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
