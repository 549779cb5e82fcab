//! Request dispatch with bearer auth and tracing instrumentation.
//!
//! This module provides [`GrafanaClient`], which turns a [`RequestSpec`] into
//! one authenticated HTTP request and hands back the raw response.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::{instrument, warn, Span};

use crate::config::ClientConfig;
use crate::error::{ApiError, AuthError, ClientError, ConfigError};
use crate::method::RestMethod;
use crate::params::RequestParams;
use crate::request::RequestSpec;

/// Builder for configuring a [`GrafanaClient`].
#[derive(Debug)]
pub struct GrafanaClientBuilder {
    config: ClientConfig,
    default_headers: HeaderMap,
}

impl GrafanaClientBuilder {
    fn new(config: ClientConfig) -> Self {
        Self {
            config,
            default_headers: HeaderMap::new(),
        }
    }

    /// Adds a default header to all requests.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let client = GrafanaClient::builder(config)
    ///     .default_header("X-Grafana-Org-Id", "2")?
    ///     .build()?;
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| ConfigError::invalid_header(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ConfigError::invalid_header(format!("invalid header value: {e}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Builds the [`GrafanaClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<GrafanaClient, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(self.config.timeout())
            .default_headers(self.default_headers)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(GrafanaClient {
            client,
            config: self.config,
        })
    }
}

/// Async client for one Grafana instance.
///
/// Every request carries `Authorization: Bearer <token>`. GET parameters are
/// encoded into the query string, POST and PUT parameters become a JSON body,
/// and other methods send no body at all.
///
/// The client only reads its configuration after construction, so a single
/// instance can serve concurrent calls from many tasks.
///
/// ## Examples
///
/// ```rust,ignore
/// use grafana::{ClientConfig, GrafanaClient, RequestParams, RestMethod};
///
/// let client = GrafanaClient::new(ClientConfig::new("https://grafana.example.com", "glsa_xxx")?)?;
///
/// let response = client
///     .request("api/search", RequestParams::new().with("query", "cpu"), RestMethod::Get)
///     .await?;
/// println!("status: {}", response.status());
/// ```
#[derive(Debug)]
pub struct GrafanaClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl GrafanaClient {
    /// Creates a new builder for configuring a client.
    pub fn builder(config: ClientConfig) -> GrafanaClientBuilder {
        GrafanaClientBuilder::new(config)
    }

    /// Creates a new client with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Self::builder(config).build()
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Builds and dispatches a request from its parts.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::EmptyPath`] without touching the network if
    /// `path` is empty; otherwise see [`send`](Self::send).
    pub async fn request(
        &self,
        path: &str,
        params: RequestParams,
        method: RestMethod,
    ) -> Result<reqwest::Response, ApiError> {
        let spec = RequestSpec::new(path, method)?.with_params(params);
        self.send(&spec).await
    }

    /// Sends a request and returns the raw response.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The transport fails (connection refused, timeout) - passed through
    ///   as [`ClientError::Request`]
    /// - The server answers 401 or 403 ([`AuthError`])
    /// - The server answers any other non-success status
    ///   ([`ClientError::HttpStatus`])
    #[instrument(
        name = "grafana_request",
        skip(self, spec),
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn send(&self, spec: &RequestSpec) -> Result<reqwest::Response, ApiError> {
        let method = spec.method();
        Span::current().record("http.method", method.to_string().as_str());

        let url = spec.url(self.config.base_url())?;
        Span::current().record("http.url", url.as_str());

        let mut request = self
            .client
            .request(method.to_reqwest(), url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.token()));

        if let Some(body) = spec.body().map_err(ClientError::Serialization)? {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await.map_err(ClientError::Request)?;

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());

            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);
            warn!(status = status_code, path = spec.path(), "Grafana returned error status");

            if status_code == 401 {
                return Err(AuthError::AuthenticationFailed { message }.into());
            }
            if status_code == 403 {
                return Err(AuthError::InsufficientPermissions {
                    operation: format!("{method} {}", spec.path()),
                }
                .into());
            }

            return Err(ClientError::HttpStatus {
                status: status_code,
                message,
            }
            .into());
        }

        Span::current().record("otel.status_code", "OK");
        Ok(response)
    }
}
