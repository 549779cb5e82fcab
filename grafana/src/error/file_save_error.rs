//! Errors writing an exported panel to disk.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure persisting exported image bytes.
///
/// The two variants keep apart a target that could not be opened at all
/// from one that was opened but could not be fully written.
#[derive(Debug, Error)]
pub enum FileSaveError {
    /// The output file could not be opened for writing.
    #[error("failed to open stream: no such file or directory")]
    OpenStream {
        /// The requested output path.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The output file was opened but writing or flushing failed.
    #[error("error saving file: {}", path.display())]
    Save {
        /// The requested output path.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl FileSaveError {
    /// Returns the output path the failed write targeted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::OpenStream { path, .. } | Self::Save { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_stream_message() {
        let err = FileSaveError::OpenStream {
            path: PathBuf::from("/invalid/path"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to open stream: no such file or directory"
        );
        assert_eq!(err.path(), std::path::Path::new("/invalid/path"));
    }

    #[test]
    fn test_save_message_names_path() {
        let err = FileSaveError::Save {
            path: PathBuf::from("/tmp/panel.png"),
            source: io::Error::new(io::ErrorKind::WriteZero, "disk full"),
        };
        assert_eq!(err.to_string(), "error saving file: /tmp/panel.png");
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let err = FileSaveError::Save {
            path: PathBuf::from("out.png"),
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        };
        assert_eq!(err.source().map(|s| s.to_string()), Some("boom".to_string()));
    }
}
