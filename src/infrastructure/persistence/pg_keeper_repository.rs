//! PostgreSQL implementation of the keeper repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Keeper, KeeperToken};
use crate::domain::repositories::KeeperRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct KeeperRow {
    id: i64,
    name: String,
    token_hash: String,
    created_at: DateTime<Utc>,
    last_used_at: Option<DateTime<Utc>>,
    revoked_at: Option<DateTime<Utc>>,
}

impl From<KeeperRow> for KeeperToken {
    fn from(row: KeeperRow) -> Self {
        KeeperToken {
            id: row.id,
            name: row.name,
            token_hash: row.token_hash,
            created_at: row.created_at,
            last_used_at: row.last_used_at,
            revoked_at: row.revoked_at,
        }
    }
}

/// PostgreSQL repository for keeper tokens.
///
/// Stores HMAC digests only. Raw tokens are never persisted.
pub struct PgKeeperRepository {
    pool: Arc<PgPool>,
}

impl PgKeeperRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeeperRepository for PgKeeperRepository {
    async fn find_active_by_hash(&self, token_hash: &str) -> Result<Option<Keeper>, AppError> {
        let row: Option<(i64, String)> = sqlx::query_as(
            r#"
            SELECT id, name
            FROM keepers
            WHERE token_hash = $1
              AND revoked_at IS NULL
            "#,
        )
        .bind(token_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|(id, name)| Keeper { id, name }))
    }

    async fn touch(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE keepers
            SET last_used_at = NOW()
            WHERE token_hash = $1
              AND revoked_at IS NULL
            "#,
        )
        .bind(token_hash)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn create(&self, name: &str, token_hash: &str) -> Result<KeeperToken, AppError> {
        let row = sqlx::query_as::<_, KeeperRow>(
            r#"
            INSERT INTO keepers (name, token_hash)
            VALUES ($1, $2)
            RETURNING id, name, token_hash, created_at, last_used_at, revoked_at
            "#,
        )
        .bind(name)
        .bind(token_hash)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<KeeperToken>, AppError> {
        let rows = sqlx::query_as::<_, KeeperRow>(
            r#"
            SELECT id, name, token_hash, created_at, last_used_at, revoked_at
            FROM keepers
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(KeeperToken::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<KeeperToken>, AppError> {
        let row = sqlx::query_as::<_, KeeperRow>(
            r#"
            SELECT id, name, token_hash, created_at, last_used_at, revoked_at
            FROM keepers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(KeeperToken::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<KeeperToken>, AppError> {
        let row = sqlx::query_as::<_, KeeperRow>(
            r#"
            SELECT id, name, token_hash, created_at, last_used_at, revoked_at
            FROM keepers
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(KeeperToken::from))
    }

    async fn revoke(&self, id: i64) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE keepers
            SET revoked_at = NOW()
            WHERE id = $1 AND revoked_at IS NULL
            "#,
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
