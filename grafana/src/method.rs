//! HTTP methods accepted by the request dispatcher.

use strum::{Display, EnumIter, EnumString};

use crate::error::ConfigError;

/// HTTP methods the Grafana client can dispatch.
///
/// Parsing is case-insensitive and [`Display`] always yields the uppercase
/// form, so `"put"`, `"Put"` and `"PUT"` all normalize to `PUT`.
///
/// The set is closed: names such as `PATCH` or `TRACE` are rejected by
/// [`parse`](Self::parse) with [`ConfigError::UnsupportedMethod`] instead of
/// being forwarded. DELETE, HEAD and OPTIONS send no body and ignore their
/// parameters.
///
/// ## Examples
///
/// ```rust
/// use grafana::RestMethod;
///
/// let method = RestMethod::parse("put").unwrap();
/// assert_eq!(method, RestMethod::Put);
/// assert_eq!(method.to_string(), "PUT");
/// assert!(method.has_body());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum RestMethod {
    /// HTTP GET - parameters travel in the query string.
    #[default]
    Get,
    /// HTTP POST - parameters travel as a JSON body.
    Post,
    /// HTTP PUT - parameters travel as a JSON body.
    Put,
    /// HTTP DELETE - no body, parameters are ignored.
    Delete,
    /// HTTP HEAD - no body, parameters are ignored.
    Head,
    /// HTTP OPTIONS - no body, parameters are ignored.
    Options,
}

impl RestMethod {
    /// Parses a method name, ignoring ASCII case.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::UnsupportedMethod`] for names outside this enum.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        name.parse()
            .map_err(|_| ConfigError::UnsupportedMethod(name.to_string()))
    }

    /// Returns `true` if requests with this method carry a JSON body.
    ///
    /// Only POST and PUT do; the body is sent even when it is empty.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    /// Returns `true` if parameters are encoded into the query string.
    pub fn uses_query(&self) -> bool {
        matches!(self, Self::Get)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
            Self::Head => reqwest::Method::HEAD,
            Self::Options => reqwest::Method::OPTIONS,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
