//! Options for exporting a single panel through the render endpoint.

use url::form_urlencoded;

use crate::params::{ParamValue, RequestParams};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_FROM: &str = "now-6h";
pub const DEFAULT_TO: &str = "now";
pub const DEFAULT_FORMAT: &str = "png";

/// What to render and how: dashboard, panel, size, time range, variables.
///
/// An immutable value. Every `with_*` method and [`set_variable`](Self::set_variable)
/// returns a new instance; the receiver is never changed.
///
/// ## Examples
///
/// ```rust
/// use grafana::PanelExportOptions;
///
/// let base = PanelExportOptions::new("node-exporter", 4).with_size(1200, 400);
/// let production = base.set_variable("env", "production");
///
/// assert!(base.variables().is_empty());
/// assert_eq!(production.variables().len(), 1);
/// assert_eq!(production.width(), 1200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelExportOptions {
    dashboard_uid: String,
    panel_id: i64,
    width: u32,
    height: u32,
    from: String,
    to: String,
    format: String,
    database: Option<String>,
    variables: RequestParams,
}

impl PanelExportOptions {
    /// Creates options for a panel with the default 800×600 PNG of the last six hours.
    pub fn new(dashboard_uid: impl Into<String>, panel_id: i64) -> Self {
        Self {
            dashboard_uid: dashboard_uid.into(),
            panel_id,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            from: DEFAULT_FROM.to_string(),
            to: DEFAULT_TO.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            database: None,
            variables: RequestParams::new(),
        }
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the time range using Grafana's syntax, e.g. `now-24h` to `now`.
    #[must_use]
    pub fn with_time_range(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = from.into();
        self.to = to.into();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Renders against a named data source, adding `/db/{name}` to the path.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Returns a copy with one template variable added or overridden.
    ///
    /// The receiver keeps its original variables.
    #[must_use]
    pub fn set_variable(&self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let mut copy = self.clone();
        copy.variables.insert(key, value);
        copy
    }

    pub fn dashboard_uid(&self) -> &str {
        &self.dashboard_uid
    }

    pub fn panel_id(&self) -> i64 {
        self.panel_id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the `(from, to)` time range.
    pub fn time_range(&self) -> (&str, &str) {
        (&self.from, &self.to)
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    pub fn variables(&self) -> &RequestParams {
        &self.variables
    }

    /// Returns the render endpoint path, with URL-encoded segments.
    ///
    /// `render/d-solo/{dashboard_uid}` followed by `/db/{database}` when a
    /// data source is set.
    pub fn render_path(&self) -> String {
        let mut path = format!("render/d-solo/{}", encode_segment(&self.dashboard_uid));
        if let Some(database) = &self.database {
            path.push_str("/db/");
            path.push_str(&encode_segment(database));
        }
        path
    }

    /// Returns the query parameters for the render endpoint.
    ///
    /// The fixed parameters come first, then one `var-{name}` per template
    /// variable in insertion order.
    pub fn to_query_params(&self) -> RequestParams {
        let mut params = RequestParams::new()
            .with("panelId", self.panel_id)
            .with("width", self.width)
            .with("height", self.height)
            .with("from", self.from.as_str())
            .with("to", self.to.as_str())
            .with("format", self.format.as_str());

        for (name, value) in self.variables.iter() {
            params.insert(format!("var-{name}"), value.clone());
        }

        params
    }
}

fn encode_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}
