//! HTTP transport and status errors.

use thiserror::Error;

/// Errors from the HTTP transport layer.
///
/// Transport failures from `reqwest` pass through untranslated in
/// [`ClientError::Request`]; non-success responses become
/// [`ClientError::HttpStatus`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to a network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success HTTP status code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// The request parameters could not be encoded as a JSON body.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl ClientError {
    /// Returns `true` if retrying the same request could succeed.
    ///
    /// The client never retries on its own; this is for callers that do.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            Self::Serialization(_) => false,
        }
    }

    /// Returns the HTTP status code if one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Serialization(_) => None,
        }
    }
}
