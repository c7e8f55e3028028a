//! Photo upload service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Session, StoredImage};
use crate::domain::repositories::ImageStore;
use crate::error::AppError;
use crate::utils::image_key::{image_key, validate_file_name};

/// Service for storing animal photos.
pub struct ImageService {
    store: Arc<dyn ImageStore>,
}

impl ImageService {
    /// Creates a new image service.
    pub fn new(store: Arc<dyn ImageStore>) -> Self {
        Self { store }
    }

    /// Stores a photo under a fresh key derived from `file_name`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Unauthorized`] if the session is anonymous
    /// - [`AppError::Validation`] if the file name is invalid or the body is empty
    /// - Any error from the image store
    pub async fn upload(
        &self,
        session: &Session,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredImage, AppError> {
        let keeper = session.keeper().ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "A keeper session is required to upload images"}),
            )
        })?;

        validate_file_name(file_name)?;

        if bytes.is_empty() {
            return Err(AppError::bad_request(
                "Image body is empty",
                json!({ "file_name": file_name }),
            ));
        }

        let key = image_key(file_name);
        let size = bytes.len();

        if let Err(e) = self.store.put(&key, bytes).await {
            tracing::error!(keeper_id = keeper.id, key = %key, error = %e, "Failed to store image");
            return Err(e);
        }

        tracing::info!(keeper_id = keeper.id, key = %key, size, "Image uploaded");

        Ok(StoredImage::new(key, size))
    }

    /// Returns true if the image store accepts writes.
    pub async fn health_check(&self) -> bool {
        self.store.health_check().await
    }
}
