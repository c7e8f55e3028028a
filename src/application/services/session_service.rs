//! Session resolution for keeper bearer tokens.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::Session;
use crate::domain::repositories::KeeperRepository;
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Hashes a raw token with HMAC-SHA256 keyed by `secret`.
///
/// Returns a 64-character lowercase hex-encoded MAC. The admin CLI stores
/// tokens with the same function, so both sides must share the secret.
pub fn token_digest(secret: &str, token: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Resolves the caller of a request into a [`Session`].
///
/// Keeper identity is owned by the keeper store; this service only maps a
/// presented token to the keeper behind it.
pub struct SessionService {
    repository: Arc<dyn KeeperRepository>,
    signing_secret: String,
}

impl SessionService {
    /// Creates a new session service.
    ///
    /// # Arguments
    ///
    /// - `repository` - keeper token store
    /// - `signing_secret` - HMAC key; must match the value used when tokens were issued
    pub fn new(repository: Arc<dyn KeeperRepository>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Resolves an optional bearer token.
    ///
    /// No token yields [`Session::Anonymous`]. A valid token yields the keeper
    /// and refreshes its `last_used_at` timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if a token was presented but is
    /// unknown or revoked.
    pub async fn resolve(&self, token: Option<&str>) -> Result<Session, AppError> {
        let Some(token) = token else {
            return Ok(Session::Anonymous);
        };

        let token_hash = token_digest(&self.signing_secret, token);

        let keeper = self
            .repository
            .find_active_by_hash(&token_hash)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({"reason": "Invalid or revoked token"}),
                )
            })?;

        if let Err(e) = self.repository.touch(&token_hash).await {
            tracing::warn!(keeper_id = keeper.id, error = %e, "Failed to record token usage");
        }

        Ok(Session::Keeper(keeper))
    }
}
