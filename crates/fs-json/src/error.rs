//! Error types for serialization and inspection.

use thiserror::Error;

/// Errors that can occur while turning a [`Value`](crate::Value) into JSON text.
#[derive(Error, Debug)]
pub enum SerializationError {
    /// `serialize` was called on a scalar. Only maps and arrays are accepted
    /// at the top level.
    #[error("value must be a map or array (found {found})")]
    InvalidTopLevelType { found: &'static str },

    /// A nested value has no JSON text form.
    #[error("unsupported value type: {found}")]
    UnsupportedValueType { found: &'static str },

    /// The input string was not valid JSON (conversion path).
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Errors raised while building an inspection report.
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("malformed element URL: {0}")]
    MalformedUrl(String),

    #[error("operation id has no components")]
    EmptyOperationId,

    #[error("no mate connector found")]
    MissingMateConnector,

    #[error(transparent)]
    Serialize(#[from] SerializationError),
}

/// Convenience alias used by the serializer and conversion modules.
pub type Result<T> = std::result::Result<T, SerializationError>;
