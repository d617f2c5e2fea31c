//! Error type for writing game records.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error writing a PGN file or a viewer snapshot
#[derive(Debug)]
pub enum RecordError {
    /// Filesystem failure on `path`
    Io { path: PathBuf, source: io::Error },
    /// Snapshot could not be serialized
    Json(serde_json::Error),
}

impl RecordError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RecordError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::Io { path, source } => {
                write!(f, "I/O error on {}: {source}", path.display())
            }
            RecordError::Json(err) => write!(f, "JSON encoding failed: {err}"),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::Io { source, .. } => Some(source),
            RecordError::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        RecordError::Json(err)
    }
}
