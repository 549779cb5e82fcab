//! Rendered panel export.
//!
//! [`PanelExportOptions`] describes the image to render and
//! [`PanelExporter`] fetches it, optionally saving it to disk.

mod exporter;
mod options;

pub use exporter::PanelExporter;
pub use options::{
    PanelExportOptions, DEFAULT_FORMAT, DEFAULT_FROM, DEFAULT_HEIGHT, DEFAULT_TO, DEFAULT_WIDTH,
};
