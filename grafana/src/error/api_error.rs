//! Top-level API error type.

use super::{AuthError, ClientError, ConfigError, FileSaveError, ValidationError};
use thiserror::Error;

/// Top-level error type for all Grafana client operations.
///
/// Every operation fails through this one type while keeping the layered
/// categories matchable.
///
/// ## Examples
///
/// ```rust,ignore
/// use grafana::ApiError;
///
/// fn handle_error(err: ApiError) {
///     match err {
///         ApiError::Client(e) => eprintln!("Network error: {e}"),
///         ApiError::Validation(e) => eprintln!("Invalid response: {e}"),
///         ApiError::Auth(e) => eprintln!("Auth failed: {e}"),
///         ApiError::Config(e) => eprintln!("Configuration error: {e}"),
///         ApiError::FileSave(e) => eprintln!("Could not save export: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport errors and non-success statuses.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Response validation errors (content type, parse failures).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Authentication and authorization errors.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Configuration and request construction errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing an exported panel to disk failed.
    #[error(transparent)]
    FileSave(#[from] FileSaveError),
}

impl ApiError {
    /// Returns `true` if the request was rejected before any I/O.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::Config(ConfigError::EmptyPath | ConfigError::UnsupportedMethod(_))
        )
    }

    /// Returns `true` if the underlying transport failed.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Client(ClientError::Request(_)))
    }
}
