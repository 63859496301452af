//! Error types for the movie API client.
//!
//! # Design
//! These errors describe why a request could not be turned into a typed
//! value. User-facing classification (success / duplicate name / generic
//! error) lives in `outcome`; an `ApiError` from a write operation always
//! collapses into `Outcome::GenericError` there.

use thiserror::Error;

/// Errors returned by `MovieClient` and `Transport` implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a status the operation does not accept.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
