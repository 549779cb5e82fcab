//! Response format trait and implementations.
//!
//! The [`ResponseFormat`] trait decides whether a response's declared content
//! type is acceptable and how its body is turned into a typed value.

use std::future::Future;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// Trait for response format parsing strategies.
///
/// ## Examples
///
/// ```rust,ignore
/// use grafana::response::{ResponseFormat, JsonFormat};
///
/// // The format type encodes both the parsing strategy and output type
/// type UserResponse = JsonFormat<serde_json::Value>;
/// ```
pub trait ResponseFormat: Send + Sync {
    /// The output type after parsing.
    type Output: Send + Sync;

    /// Parse a response body into the output type.
    fn parse(
        body: bytes::Bytes,
    ) -> impl Future<Output = Result<Self::Output, ValidationError>> + Send;

    /// Returns the content type this format expects.
    fn content_type() -> &'static str;

    /// Checks the `Content-Type` header as received.
    ///
    /// The default accepts anything.
    fn check_content_type(_actual: &str) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// JSON response format with typed deserialization.
///
/// The response must declare a content type containing `application/json`.
/// The match is a case-sensitive substring test, so parameters such as
/// `; charset=utf-8` are fine.
///
/// ## Type Parameters
///
/// - `T`: The type to deserialize the JSON into. Must implement [`DeserializeOwned`].
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat<T>(PhantomData<T>);

impl<T: DeserializeOwned + Send + Sync> ResponseFormat for JsonFormat<T> {
    type Output = T;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        serde_json::from_slice(&body).map_err(ValidationError::JsonParse)
    }

    fn content_type() -> &'static str {
        "application/json"
    }

    fn check_content_type(actual: &str) -> Result<(), ValidationError> {
        if actual.contains(Self::content_type()) {
            Ok(())
        } else {
            Err(ValidationError::ContentTypeMismatch {
                expected: Self::content_type().to_string(),
                actual: actual.to_string(),
            })
        }
    }
}

/// Binary response format.
///
/// Returns the raw response bytes without interpretation and accepts any
/// content type.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryFormat;

impl ResponseFormat for BinaryFormat {
    type Output = bytes::Bytes;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        Ok(body)
    }

    fn content_type() -> &'static str {
        "application/octet-stream"
    }
}
