//! Response validation and parsing errors.

use thiserror::Error;

/// Errors while validating or decoding a response body.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// JSON parsing failed after the content type was accepted.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Response content type doesn't match the expected format.
    #[error("Unexpected content type: expected {expected}, got {actual}")]
    ContentTypeMismatch {
        /// The expected content type.
        expected: String,
        /// The content type received, empty if the header was absent.
        actual: String,
    },
}

impl ValidationError {
    /// Returns `true` if this is a format mismatch error.
    pub fn is_format_mismatch(&self) -> bool {
        matches!(self, Self::ContentTypeMismatch { .. })
    }

    /// Returns `true` if this is a parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::JsonParse(_))
    }

    /// Returns the content type actually received, for mismatch errors.
    pub fn actual_content_type(&self) -> Option<&str> {
        match self {
            Self::ContentTypeMismatch { actual, .. } => Some(actual),
            Self::JsonParse(_) => None,
        }
    }
}
