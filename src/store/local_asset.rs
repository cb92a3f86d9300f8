//! Asset store backed by a local directory.
//!
//! Uploaded files are copied under a fresh id and addressed as
//! `{base_url}/{id}`, so the directory can be served statically.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use super::{AssetStore, Photo};
use crate::error::{CatalogError, Result};

#[derive(Debug, Clone)]
pub struct LocalAssetStore {
    root: PathBuf,
    base_url: String,
}

impl LocalAssetStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn asset_path(&self, asset_id: &str) -> Option<PathBuf> {
        let valid = !asset_id.is_empty()
            && asset_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_')
            && !asset_id.starts_with('.');
        valid.then(|| self.root.join(asset_id))
    }
}

#[async_trait]
impl AssetStore for LocalAssetStore {
    async fn upload(&self, path: &Path) -> Result<Photo> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .filter(|e| e.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|e| format!(".{}", e.to_ascii_lowercase()))
            .unwrap_or_default();
        let public_id = format!("{}{}", Uuid::new_v4().simple(), extension);

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| CatalogError::Upload(format!("{}: {}", self.root.display(), e)))?;
        tokio::fs::copy(path, self.root.join(&public_id))
            .await
            .map_err(|e| CatalogError::Upload(format!("{}: {}", path.display(), e)))?;

        info!(asset = %public_id, "asset uploaded");
        Ok(Photo {
            url: format!("{}/{}", self.base_url, public_id),
            public_id,
        })
    }

    async fn delete(&self, asset_id: &str) -> Result<()> {
        let path = self
            .asset_path(asset_id)
            .ok_or_else(|| CatalogError::Delete(format!("invalid asset id: {}", asset_id)))?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                info!(asset = %asset_id, "asset deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(asset = %asset_id, "asset already absent");
                Ok(())
            }
            Err(e) => Err(CatalogError::Delete(format!("{}: {}", asset_id, e))),
        }
    }
}
