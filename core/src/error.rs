//! Error types for the content API client.
//!
//! # Design
//! Failures are split the way they surface on the wire: the request never
//! completed (`Transport`), the server answered with a non-2xx status
//! (`NotFound` / `Http`), or the server answered 2xx but the envelope `code`
//! reports a business failure (`Api`). The client never retries or recovers;
//! every variant reaches the caller as-is.

use thiserror::Error;

/// Errors returned by `ApiCall::parse` / `ApiCall::send` and by transports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The connection could not be established, timed out, or broke mid-body.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server returned HTTP 404 for the path itself.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The envelope carried a code other than the configured success code.
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload or query could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// True for a 404 at either the HTTP or the envelope level.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound | ApiError::Api { code: 404, .. })
    }
}
