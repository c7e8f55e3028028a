//! Filesystem-backed image store.

use async_trait::async_trait;
use serde_json::json;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::domain::repositories::ImageStore;
use crate::error::AppError;

/// Stores photos as plain files in a single directory.
///
/// The same directory is served read-only under `/images`. Keys are written
/// with `create_new`, so an existing file is never overwritten.
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    /// Opens the store, creating `root` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the directory cannot be created.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();

        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::persistence(
                "Failed to create image directory",
                json!({ "path": root.display().to_string(), "reason": e.to_string() }),
            )
        })?;

        info!("Image store ready at {}", root.display());

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), AppError> {
        let path = self.root.join(key);

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => {
                    AppError::conflict("Image key already exists", json!({ "key": key }))
                }
                _ => AppError::persistence(
                    "Failed to store image",
                    json!({ "key": key, "reason": e.to_string() }),
                ),
            })?;

        let written = async {
            file.write_all(&bytes).await?;
            file.flush().await
        }
        .await;

        if let Err(e) = written {
            warn!(key = %key, error = %e, "Partial image write, removing file");
            let _ = fs::remove_file(&path).await;
            return Err(AppError::persistence(
                "Failed to store image",
                json!({ "key": key, "reason": e.to_string() }),
            ));
        }

        debug!(key = %key, size = bytes.len(), "Image written");
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, AppError> {
        match fs::metadata(self.root.join(key)).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AppError::persistence(
                "Failed to look up image",
                json!({ "key": key, "reason": e.to_string() }),
            )),
        }
    }

    async fn health_check(&self) -> bool {
        match fs::metadata(&self.root).await {
            Ok(meta) => meta.is_dir() && !meta.permissions().readonly(),
            Err(_) => false,
        }
    }
}
