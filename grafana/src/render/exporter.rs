//! Panel export through Grafana's image renderer.

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};

use super::PanelExportOptions;
use crate::client::GrafanaClient;
use crate::error::{ApiError, FileSaveError};
use crate::request::RequestSpec;
use crate::response::BinaryFormat;

/// Renders dashboard panels to images.
///
/// Requests go to `render/d-solo/...` and the body comes back untouched, with
/// no content-type check. Transport and status failures propagate unchanged;
/// wrap them at the call site if a caller needs its own error type.
///
/// ## Examples
///
/// ```rust,ignore
/// use grafana::{ClientConfig, GrafanaClient, PanelExportOptions};
///
/// let client = GrafanaClient::new(ClientConfig::from_env()?)?;
/// let options = PanelExportOptions::new("node-exporter", 4).set_variable("instance", "web-01");
///
/// let saved = client.panels().export_panel_to_file("cpu.png", &options).await?;
/// println!("wrote {}", saved.display());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PanelExporter<'a> {
    client: &'a GrafanaClient,
}

impl<'a> PanelExporter<'a> {
    pub fn new(client: &'a GrafanaClient) -> Self {
        Self { client }
    }

    /// Renders a panel and returns the raw image bytes.
    #[instrument(
        name = "grafana.render.panel",
        skip(self, options),
        fields(
            dashboard_uid = options.dashboard_uid(),
            panel_id = options.panel_id(),
        )
    )]
    pub async fn export_panel(&self, options: &PanelExportOptions) -> Result<bytes::Bytes, ApiError> {
        let spec = RequestSpec::get(options.render_path())?.with_params(options.to_query_params());
        self.client.execute::<BinaryFormat>(&spec).await
    }

    /// Renders a panel and writes the image to `output_path`.
    ///
    /// An existing file is overwritten; missing parent directories are not
    /// created. Resolves with `output_path` on success.
    ///
    /// ## Errors
    ///
    /// - Any error from [`export_panel`](Self::export_panel), unchanged
    /// - [`FileSaveError::OpenStream`] if the file cannot be opened
    /// - [`FileSaveError::Save`] if writing to the opened file fails
    #[instrument(
        name = "grafana.render.panel_to_file",
        skip(self, output_path, options),
        fields(output_path = %output_path.as_ref().display())
    )]
    pub async fn export_panel_to_file(
        &self,
        output_path: impl AsRef<Path>,
        options: &PanelExportOptions,
    ) -> Result<PathBuf, ApiError> {
        let output_path = output_path.as_ref();
        let image = self.export_panel(options).await?;
        save(output_path, &image).await?;
        Ok(output_path.to_path_buf())
    }
}

async fn save(path: &Path, contents: &[u8]) -> Result<(), FileSaveError> {
    let mut file = File::create(path)
        .await
        .map_err(|source| FileSaveError::OpenStream {
            path: path.to_path_buf(),
            source,
        })?;

    let written = async {
        file.write_all(contents).await?;
        file.flush().await
    };
    written.await.map_err(|source| FileSaveError::Save {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "Saved panel image");
    Ok(())
}

impl GrafanaClient {
    /// Returns the panel export endpoints bound to this client.
    pub fn panels(&self) -> PanelExporter<'_> {
        PanelExporter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::ClientError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GrafanaClient {
        let config = ClientConfig::new(server.uri(), "test-token").unwrap();
        GrafanaClient::new(config).unwrap()
    }

    async fn mount_render(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/render/d-solo/dashboardUid"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("image-content", "image/png"))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_export_panel_returns_raw_bytes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/render/d-solo/dashboardUid"))
            .and(query_param("panelId", "1"))
            .and(query_param("width", "800"))
            .and(query_param("height", "600"))
            .and(query_param("from", "now-6h"))
            .and(query_param("to", "now"))
            .and(query_param("format", "png"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("image-content", "image/png"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let options = PanelExportOptions::new("dashboardUid", 1);
        let image = client.panels().export_panel(&options).await.unwrap();
        assert_eq!(image, "image-content");
    }

    #[tokio::test]
    async fn test_export_panel_with_database_and_variables() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/render/d-solo/abc/db/prometheus"))
            .and(query_param("var-host", "web-01"))
            .and(query_param("var-shard", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x89, 0x50, 0x4E, 0x47]))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let options = PanelExportOptions::new("abc", 7)
            .with_database("prometheus")
            .set_variable("host", "web-01")
            .set_variable("shard", 3);
        let image = client.panels().export_panel(&options).await.unwrap();
        assert_eq!(&image[..], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[tokio::test]
    async fn test_export_failure_propagates_unchanged() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Rendering failed"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let options = PanelExportOptions::new("dashboardUid", 1);
        let err = client.panels().export_panel(&options).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Client(ClientError::HttpStatus { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_export_panel_to_file_saves_image_content() {
        let mock_server = MockServer::start().await;
        mount_render(&mock_server).await;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("panel.png");

        let client = client_for(&mock_server);
        let options = PanelExportOptions::new("dashboardUid", 1);
        let saved = client
            .panels()
            .export_panel_to_file(&target, &options)
            .await
            .unwrap();

        assert_eq!(saved, target);
        assert_eq!(std::fs::read(&target).unwrap(), b"image-content");
    }

    #[tokio::test]
    async fn test_export_panel_to_file_overwrites_existing() {
        let mock_server = MockServer::start().await;
        mount_render(&mock_server).await;

        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"old content that is longer").unwrap();

        let client = client_for(&mock_server);
        let options = PanelExportOptions::new("dashboardUid", 1);
        client
            .panels()
            .export_panel_to_file(file.path(), &options)
            .await
            .unwrap();

        assert_eq!(std::fs::read(file.path()).unwrap(), b"image-content");
    }

    #[tokio::test]
    async fn test_export_panel_to_missing_directory_fails() {
        let mock_server = MockServer::start().await;
        mount_render(&mock_server).await;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("panel.png");

        let client = client_for(&mock_server);
        let options = PanelExportOptions::new("dashboardUid", 1);
        let err = client
            .panels()
            .export_panel_to_file(&target, &options)
            .await
            .unwrap_err();

        match err {
            ApiError::FileSave(e @ FileSaveError::OpenStream { .. }) => {
                assert_eq!(e.to_string(), "failed to open stream: no such file or directory");
                assert_eq!(e.path(), target.as_path());
            }
            other => panic!("expected FileSaveError::OpenStream, got {other:?}"),
        }
        assert!(!target.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_write_failure_after_open_is_a_save_error() {
        let err = save(Path::new("/dev/full"), b"image-content").await.unwrap_err();

        assert!(matches!(err, FileSaveError::Save { .. }));
        assert_eq!(err.to_string(), "error saving file: /dev/full");
        assert_eq!(err.path(), Path::new("/dev/full"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_export_panel_to_full_device_fails_with_save_error() {
        let mock_server = MockServer::start().await;
        mount_render(&mock_server).await;

        let client = client_for(&mock_server);
        let options = PanelExportOptions::new("dashboardUid", 1);
        let err = client
            .panels()
            .export_panel_to_file("/dev/full", &options)
            .await
            .unwrap_err();

        match err {
            ApiError::FileSave(e @ FileSaveError::Save { .. }) => {
                assert_eq!(e.to_string(), "error saving file: /dev/full");
            }
            other => panic!("expected FileSaveError::Save, got {other:?}"),
        }
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_export_emits_spans() {
        let mock_server = MockServer::start().await;
        mount_render(&mock_server).await;

        let dir = tempfile::tempdir().unwrap();
        let client = client_for(&mock_server);
        let options = PanelExportOptions::new("dashboardUid", 1);
        client
            .panels()
            .export_panel_to_file(dir.path().join("out.png"), &options)
            .await
            .unwrap();

        assert!(logs_contain("Saved panel image"));
        assert!(logs_contain("dashboardUid"));
    }
}
