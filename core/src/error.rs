//! Error types for the kennel API client.
//!
//! # Design
//! The kinds mirror what the backend can tell us: a payload rejected by its
//! business rules (`Validation`), an id that does not resolve (`NotFound`),
//! or a transport that never produced a response (`Transport`). Anything else
//! lands in `HttpError` with the raw status and body. None of these are
//! produced by local checks; they are all read off a response or a failed
//! round-trip.

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by kennel services and `parse_*` functions.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the payload (400 or 422).
    #[error("validation failed ({status}): {message}")]
    Validation { status: u16, message: String },

    /// The backend returned 404 for the referenced dog, guardian or litter.
    #[error("resource not found: {message}")]
    NotFound { message: String },

    /// The request never completed: connection refused, timeout, DNS, etc.
    #[error("transport failed: {0}")]
    Transport(String),

    /// Any other non-success status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

/// Error envelope the backend writes for rejected requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    mensagem: String,
}

/// Pull the human-readable message out of an error response, falling back to
/// the raw body when it is not the backend's envelope.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.mensagem)
        .unwrap_or_else(|_| body.to_string())
}
