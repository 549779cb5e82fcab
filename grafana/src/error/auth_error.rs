//! Authentication and authorization errors.

use thiserror::Error;

/// Errors raised when Grafana rejects the bearer token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Server answered 401: the token is missing, invalid or expired.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Error message from the server.
        message: String,
    },

    /// Server answered 403: the token lacks the permission required.
    #[error("Insufficient permissions: {operation}")]
    InsufficientPermissions {
        /// The operation that was denied, as `METHOD path`.
        operation: String,
    },
}

impl AuthError {
    /// Returns `true` if a fresh token could resolve this error.
    pub fn is_refreshable(&self) -> bool {
        matches!(self, Self::AuthenticationFailed { .. })
    }
}
