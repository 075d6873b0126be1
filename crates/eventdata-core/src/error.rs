//! Error types for eventdata

use thiserror::Error;

/// Result type alias for envelope operations
pub type EventResult<T> = Result<T, EventError>;

/// Error type for envelope operations
#[derive(Error, Debug)]
pub enum EventError {
    /// Spec version string is not one of the supported versions
    #[error("unknown spec version: {0}")]
    UnknownSpecVersion(String),

    /// Content encoding string is neither empty nor "base64"
    #[error("unsupported content encoding: {0}")]
    UnsupportedContentEncoding(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Value could not be serialized by the selected codec
    #[error("marshal error: {0}")]
    MarshalError(String),

    /// Stored payload is not valid text for the declared content encoding
    #[error("decoding error: {0}")]
    DecodingError(String),

    /// Payload does not fit the selected codec or the target's shape
    #[error("unmarshal error: {0}")]
    UnmarshalError(String),
}

impl From<serde_json::Error> for EventError {
    fn from(err: serde_json::Error) -> Self {
        EventError::ConfigError(err.to_string())
    }
}
