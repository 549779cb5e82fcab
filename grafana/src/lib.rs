//! Async client for the Grafana HTTP API.
//!
//! The `grafana` crate wraps Grafana's REST endpoints behind a small,
//! bearer-authenticated HTTP client.
//!
//! ## Features
//!
//! - **Request dispatch**: GET parameters go into the query string, POST/PUT
//!   parameters become a JSON body
//! - **Checked JSON decoding**: responses must declare `application/json`
//!   before they are parsed
//! - **User management**: current user, lookup, update and delete
//! - **Panel export**: render dashboard panels to images, in memory or on disk
//! - **Layered error handling**: structured errors for each failure mode
//!
//! ## Example
//!
//! ```rust,ignore
//! use grafana::{ClientConfig, GrafanaClient, PanelExportOptions};
//!
//! let client = GrafanaClient::new(ClientConfig::new("https://grafana.example.com", "glsa_xxx")?)?;
//!
//! let me = client.users().get_current_user().await?;
//! let options = PanelExportOptions::new("node-exporter", 4).with_size(1200, 400);
//! client.panels().export_panel_to_file("cpu.png", &options).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod method;
pub mod params;
pub mod render;
pub mod request;
pub mod response;
pub mod users;

// Re-exports for convenience
pub use client::{GrafanaClient, GrafanaClientBuilder};
pub use config::ClientConfig;
pub use error::{ApiError, AuthError, ClientError, ConfigError, FileSaveError, ValidationError};
pub use method::RestMethod;
pub use params::{ParamValue, RequestParams};
pub use render::{PanelExportOptions, PanelExporter};
pub use request::RequestSpec;
pub use response::{DecodedResponse, ResponseFormat};
pub use users::UserService;
