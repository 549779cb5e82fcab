//! Validated request descriptions.

use url::Url;

use crate::error::ConfigError;
use crate::method::RestMethod;
use crate::params::RequestParams;

/// One request to dispatch: path, method and parameters.
///
/// The path is validated on construction, so an empty path is
/// rejected before any network activity. A leading slash is stripped.
///
/// ## Examples
///
/// ```rust
/// use grafana::{RequestSpec, RestMethod};
///
/// let spec = RequestSpec::new("/api/users/2", RestMethod::Get).unwrap();
/// assert_eq!(spec.path(), "api/users/2");
///
/// assert!(RequestSpec::new("", RestMethod::Get).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    path: String,
    method: RestMethod,
    params: RequestParams,
}

impl RequestSpec {
    /// Creates a request with no parameters.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::EmptyPath`] if `path` is empty.
    pub fn new(path: impl AsRef<str>, method: RestMethod) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.is_empty() {
            return Err(ConfigError::EmptyPath);
        }

        Ok(Self {
            path: path.trim_start_matches('/').to_string(),
            method,
            params: RequestParams::new(),
        })
    }

    /// Shorthand for a GET request.
    pub fn get(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        Self::new(path, RestMethod::Get)
    }

    /// Sets the request parameters.
    #[must_use]
    pub fn with_params(mut self, params: RequestParams) -> Self {
        self.params = params;
        self
    }

    /// Returns the path without its leading slash.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> RestMethod {
        self.method
    }

    pub fn params(&self) -> &RequestParams {
        &self.params
    }

    /// Joins the path onto `base_url` and appends the query string for GET.
    ///
    /// `base_url` is expected without a trailing slash, as stored by
    /// [`ClientConfig`](crate::ClientConfig).
    pub fn url(&self, base_url: &str) -> Result<Url, ConfigError> {
        let mut url = Url::parse(&format!("{}/{}", base_url.trim_end_matches('/'), self.path))?;

        if self.method.uses_query() && !self.params.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in self.params.iter() {
                query.append_pair(key, &value.to_string());
            }
        }

        Ok(url)
    }

    /// Returns the JSON body for POST and PUT, `None` otherwise.
    pub fn body(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        if self.method.has_body() {
            serde_json::to_vec(&self.params).map(Some)
        } else {
            Ok(None)
        }
    }
}
