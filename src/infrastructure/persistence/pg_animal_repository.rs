//! PostgreSQL implementation of the animal repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{AnimalRecord, NewAnimalRecord, Species};
use crate::domain::repositories::AnimalRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct AnimalRow {
    id: i64,
    name: String,
    age: f64,
    species: String,
    enclosure: String,
    image_key: String,
    owner_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<AnimalRow> for AnimalRecord {
    type Error = AppError;

    fn try_from(row: AnimalRow) -> Result<Self, Self::Error> {
        let species = parse_species(&row.species)?;

        Ok(AnimalRecord {
            id: row.id,
            name: row.name,
            age: row.age,
            species,
            enclosure: row.enclosure,
            image_key: row.image_key,
            owner_id: row.owner_id,
            created_at: row.created_at,
        })
    }
}

/// Decodes a stored species label.
///
/// The column is constrained by the schema, so a mismatch means the table
/// was written by something else.
fn parse_species(label: &str) -> Result<Species, AppError> {
    label.parse::<Species>().map_err(|e| {
        tracing::error!(species = %e.label, "Stored row has unknown species");
        AppError::internal("Corrupt animal row", json!({ "species": e.label }))
    })
}

/// PostgreSQL repository for the `animals` table.
pub struct PgAnimalRepository {
    pool: Arc<PgPool>,
}

impl PgAnimalRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnimalRepository for PgAnimalRepository {
    async fn create(&self, new_animal: NewAnimalRecord) -> Result<AnimalRecord, AppError> {
        let row = sqlx::query_as::<_, AnimalRow>(
            r#"
            INSERT INTO animals (name, age, species, enclosure, image_key, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, age, species, enclosure, image_key, owner_id, created_at
            "#,
        )
        .bind(&new_animal.name)
        .bind(new_animal.age)
        .bind(new_animal.species.label())
        .bind(&new_animal.enclosure)
        .bind(&new_animal.image_key)
        .bind(new_animal.owner_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn count_by_species(&self) -> Result<Vec<(Species, i64)>, AppError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT species, COUNT(*)
            FROM animals
            GROUP BY species
            ORDER BY species
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter()
            .map(|(label, count)| Ok((parse_species(&label)?, count)))
            .collect()
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
