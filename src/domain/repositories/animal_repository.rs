//! Repository trait for animal records.

use crate::domain::entities::{AnimalRecord, NewAnimalRecord, Species};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence collaborator for registered animals.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAnimalRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// Stores a new animal and returns the persisted row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the store rejects the row or is
    /// unreachable.
    async fn create(&self, new_animal: NewAnimalRecord) -> Result<AnimalRecord, AppError>;

    /// Counts stored animals grouped by species.
    ///
    /// Species with no animals are omitted.
    async fn count_by_species(&self) -> Result<Vec<(Species, i64)>, AppError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
