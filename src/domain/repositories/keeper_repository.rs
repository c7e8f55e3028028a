//! Repository trait for keeper credentials.

use crate::domain::entities::{Keeper, KeeperToken};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for keeper tokens.
///
/// Tokens are stored as HMAC-SHA256 digests, see
/// [`crate::application::services::session_service::token_digest`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgKeeperRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeeperRepository: Send + Sync {
    /// Finds the keeper owning a non-revoked token digest.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Keeper))` if the digest matches an active token
    /// - `Ok(None)` if it is unknown or revoked
    async fn find_active_by_hash(&self, token_hash: &str) -> Result<Option<Keeper>, AppError>;

    /// Updates the `last_used_at` timestamp for a token digest.
    async fn touch(&self, token_hash: &str) -> Result<(), AppError>;

    /// Creates a new keeper token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name or digest is already taken.
    async fn create(&self, name: &str, token_hash: &str) -> Result<KeeperToken, AppError>;

    /// Lists all keeper tokens, newest first.
    async fn list(&self) -> Result<Vec<KeeperToken>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<KeeperToken>, AppError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<KeeperToken>, AppError>;

    /// Revokes a token. Already revoked tokens are left unchanged.
    async fn revoke(&self, id: i64) -> Result<(), AppError>;
}
