//! Storage trait for animal photos.

use crate::error::AppError;
use async_trait::async_trait;

/// Blob store for uploaded photos.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::LocalImageStore`] - Local directory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Writes `bytes` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the key already exists and
    /// [`AppError::Persistence`] on I/O failures.
    async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), AppError>;

    /// Returns true if a photo is stored under `key`.
    async fn exists(&self, key: &str) -> Result<bool, AppError>;

    /// Returns true if the store accepts writes.
    async fn health_check(&self) -> bool;
}
