use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReconcileError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
