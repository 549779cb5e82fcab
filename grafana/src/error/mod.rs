//! Layered error types for the Grafana client.
//!
//! - [`ApiError`] - Top-level error type for all operations
//! - [`ClientError`] - HTTP transport and status errors
//! - [`ValidationError`] - Content type and parsing errors
//! - [`AuthError`] - Rejected credentials
//! - [`ConfigError`] - Configuration and request construction errors
//! - [`FileSaveError`] - Failures writing exported panels to disk

mod api_error;
mod auth_error;
mod client_error;
mod config_error;
mod file_save_error;
mod validation_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use file_save_error::FileSaveError;
pub use validation_error::ValidationError;
