//! Staged Upload Sweeper
//!
//! Background task that periodically removes staged uploads older than a
//! maximum age. Requests clean up their own staged files; anything older
//! than the limit was left behind by a request that never finished.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Removes regular files in `dir` last modified more than `max_age` ago.
///
/// A missing directory counts as empty. Returns the number of files removed.
pub async fn sweep_stale_uploads(dir: &Path, max_age: Duration) -> std::io::Result<usize> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };

    let now = SystemTime::now();
    let mut removed = 0;

    while let Some(entry) = entries.next_entry().await? {
        let metadata = match entry.metadata().await {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => continue,
        };
        let age = metadata
            .modified()
            .ok()
            .and_then(|modified| now.duration_since(modified).ok())
            .unwrap_or_default();
        if age < max_age {
            continue;
        }

        match tokio::fs::remove_file(entry.path()).await {
            Ok(()) => removed += 1,
            Err(e) => warn!(path = %entry.path().display(), error = %e, "failed to sweep staged upload"),
        }
    }

    Ok(removed)
}

/// Spawns a background task that sweeps `upload_dir` every `interval_secs`.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let handle = spawn_upload_sweeper(PathBuf::from("uploads"), 300, 3600);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_upload_sweeper(
    upload_dir: PathBuf,
    interval_secs: u64,
    max_age_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs.max(1));
    let max_age = Duration::from_secs(max_age_secs);

    tokio::spawn(async move {
        info!(
            "Starting upload sweeper for {} every {} seconds",
            upload_dir.display(),
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            match sweep_stale_uploads(&upload_dir, max_age).await {
                Ok(0) => debug!("Upload sweep: nothing to remove"),
                Ok(removed) => info!("Upload sweep: removed {} stale staged files", removed),
                Err(e) => warn!(error = %e, "Upload sweep failed"),
            }
        }
    })
}
