use std::path::PathBuf;

use crate::error::{Error, Result};

/// Reads the study-notes Markdown file. The file is re-read on every call
/// so edits show up without a restart.
#[derive(Clone)]
pub struct DocumentService {
    path: PathBuf,
}

impl DocumentService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn read_notes(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            tracing::error!(path = %self.path.display(), error = %err, "failed to read notes document");
            Error::Internal("Failed to read notes document".to_string())
        })
    }
}
