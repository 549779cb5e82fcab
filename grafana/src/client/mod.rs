//! HTTP client module.
//!
//! [`GrafanaClient`] dispatches authenticated requests and decodes their
//! responses. Typed endpoint groups such as [`UserService`](crate::UserService)
//! and [`PanelExporter`](crate::PanelExporter) borrow a client.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use grafana::{ClientConfig, GrafanaClient, RequestParams, RestMethod};
//!
//! let config = ClientConfig::new("https://grafana.example.com", "glsa_xxx")?;
//! let client = GrafanaClient::new(config)?;
//!
//! let health = client
//!     .request_json("api/health", RequestParams::new(), RestMethod::Get)
//!     .await?;
//! ```

mod decoder;
mod dispatcher;

pub use dispatcher::{GrafanaClient, GrafanaClientBuilder};
