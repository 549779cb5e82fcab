//! Client configuration and request construction errors.

use thiserror::Error;

/// Errors in client configuration or request construction.
///
/// These are raised before any I/O happens and indicate a programmer error
/// or a missing setting.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request path was empty.
    #[error("API path must not be empty")]
    EmptyPath,

    /// The HTTP method name is not one the dispatcher knows.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// None of the environment variables holding a setting were set.
    #[error("Missing environment variable: one of {}", env_vars.join(", "))]
    MissingEnv {
        /// The variables that were checked, in order.
        env_vars: Vec<String>,
    },

    /// A default header name or value is not valid HTTP.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header problem.
        message: String,
    },
}

impl ConfigError {
    /// Creates a missing environment variable error.
    pub fn missing_env(env_vars: &[&str]) -> Self {
        Self::MissingEnv {
            env_vars: env_vars.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Creates an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }
}
