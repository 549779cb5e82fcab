//! Decoded response values.

/// A decoded Grafana response.
///
/// JSON endpoints produce [`DecodedResponse::Json`]; the render endpoint
/// produces [`DecodedResponse::Binary`].
///
/// ## Examples
///
/// ```rust
/// use grafana::response::DecodedResponse;
///
/// let response = DecodedResponse::Json(serde_json::json!({"id": 1}));
/// assert_eq!(response.as_json().and_then(|v| v["id"].as_i64()), Some(1));
/// assert!(response.as_binary().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedResponse {
    /// Parsed JSON body.
    Json(serde_json::Value),
    /// Raw body bytes, e.g. a rendered PNG.
    Binary(bytes::Bytes),
}

impl DecodedResponse {
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_))
    }

    /// Attempt to get the JSON value, returning `None` for binary responses.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(v) => Some(v),
            Self::Binary(_) => None,
        }
    }

    /// Attempt to get the raw bytes, returning `None` for JSON responses.
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(b) => Some(b.as_ref()),
            Self::Json(_) => None,
        }
    }

    /// Convert into the JSON value, returning `Err(self)` for binary responses.
    pub fn into_json(self) -> Result<serde_json::Value, Self> {
        match self {
            Self::Json(v) => Ok(v),
            other => Err(other),
        }
    }

    /// Convert into the raw bytes, returning `Err(self)` for JSON responses.
    pub fn into_binary(self) -> Result<bytes::Bytes, Self> {
        match self {
            Self::Binary(b) => Ok(b),
            other => Err(other),
        }
    }
}

impl From<serde_json::Value> for DecodedResponse {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl From<bytes::Bytes> for DecodedResponse {
    fn from(value: bytes::Bytes) -> Self {
        Self::Binary(value)
    }
}
