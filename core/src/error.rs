//! Error types for the item clients.
//!
//! # Design
//! Every failure reaches the caller unmodified: there is no retry and no
//! translation layer. Non-2xx responses keep the raw status and body for
//! debugging.

use thiserror::Error;

/// Errors returned by the item clients and services.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS,
    /// timeout, malformed URI).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body is not valid JSON or does not fit the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The document is valid JSON but has no usable `items` array.
    #[error("unexpected document shape: {0}")]
    UnexpectedShape(String),
}
