//! Error types for the collection utilities.

use serde_json::Value;
use thiserror::Error;

/// Result type alias for fallible collection operations
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Main error type for collection operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("Expected a sequence, found {found}")]
    NotASequence { found: String },

    #[error("Expected a mapping, found {found}")]
    NotAMapping { found: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Serialization error: {message}")]
    SerializationError { message: String },
}

impl CollectionError {
    pub fn not_a_sequence(found: impl Into<String>) -> Self {
        Self::NotASequence {
            found: found.into(),
        }
    }

    pub fn not_a_mapping(found: impl Into<String>) -> Self {
        Self::NotAMapping {
            found: found.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: msg.into(),
        }
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError {
            message: msg.into(),
        }
    }
}

impl From<serde_json::Error> for CollectionError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

/// Human-readable name of a JSON value's shape, used in error messages
pub(crate) fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
