//! Staged upload files.
//!
//! A `StagedFile` owns a photo written to local disk while a request is in
//! flight. The file is removed when the guard is cleaned up or dropped, on
//! every exit path.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    armed: bool,
}

impl StagedFile {
    /// Takes ownership of an existing file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            armed: true,
        }
    }

    /// Writes `bytes` into `dir` under a unique name derived from `file_name`.
    pub async fn write(dir: &Path, file_name: &str, bytes: &[u8]) -> std::io::Result<Self> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(format!("{}-{}", Uuid::new_v4().simple(), sanitize(file_name)));
        tokio::fs::write(&path, bytes).await?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the file now. Failures are logged and otherwise ignored.
    pub async fn cleanup(mut self) {
        self.armed = false;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => debug!(path = %self.path.display(), "staged file removed"),
            Err(e) => log_failure(&self.path, &e),
        }
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "staged file removed"),
            Err(e) => log_failure(&self.path, &e),
        }
    }
}

fn log_failure(path: &Path, err: &std::io::Error) {
    if err.kind() != ErrorKind::NotFound {
        warn!(path = %path.display(), error = %err, "failed to remove staged file");
    }
}

/// Keeps the last path component's safe characters.
fn sanitize(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}
