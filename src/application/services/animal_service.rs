//! Animal registration service.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;

use crate::domain::dispatch::dispatch;
use crate::domain::entities::{AnimalRecord, NewAnimalRecord, Profile, Session, Species};
use crate::domain::repositories::{AnimalRepository, ImageStore};
use crate::error::AppError;
use crate::utils::image_key::validate_image_key;

/// Outcome of a successful registration.
///
/// Only produced after the record has been stored.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub record: AnimalRecord,
    pub sound: &'static str,
    pub description: String,
}

/// Service for registering animals on behalf of a keeper.
///
/// Builds the animal from the submitted species label, checks its photo was
/// uploaded, logs its description and hands it to the persistence
/// collaborator. Nothing is kept in memory once the call returns.
pub struct AnimalService {
    repository: Arc<dyn AnimalRepository>,
    images: Arc<dyn ImageStore>,
}

impl AnimalService {
    /// Creates a new animal service.
    ///
    /// `images` must be the store the upload endpoint writes to.
    pub fn new(repository: Arc<dyn AnimalRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self { repository, images }
    }

    /// Registers one animal.
    ///
    /// `profile` must already be validated by the caller.
    ///
    /// # Errors
    ///
    /// - [`AppError::Unauthorized`] if the session is anonymous
    /// - [`AppError::UnrecognizedSpecies`] if `species` is not a known label;
    ///   nothing is stored
    /// - [`AppError::Validation`] if `image_key` is malformed or no photo is
    ///   stored under it
    /// - Any error from the repository; no confirmation is produced
    pub async fn register(
        &self,
        session: &Session,
        species: &str,
        profile: Profile,
        image_key: String,
    ) -> Result<Registration, AppError> {
        let keeper = session.keeper().ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "A keeper session is required to register animals"}),
            )
        })?;

        let animal = dispatch(species, profile)?;

        validate_image_key(&image_key)?;
        if !self.images.exists(&image_key).await? {
            return Err(AppError::bad_request(
                "Image not found, upload it first",
                json!({ "image": image_key }),
            ));
        }
        let description = animal.describe();
        let sound = animal.make_sound();
        let species = animal.species();

        tracing::info!(keeper_id = keeper.id, animal = %description, "Animal submitted");

        let profile = animal.into_profile();
        let new_animal = NewAnimalRecord {
            name: profile.name,
            age: profile.age,
            species,
            enclosure: profile.enclosure,
            image_key,
            owner_id: keeper.id,
        };

        let record = match self.repository.create(new_animal).await {
            Ok(record) => record,
            Err(e) => {
                tracing::error!(keeper_id = keeper.id, error = %e, "Failed to store animal");
                return Err(e);
            }
        };

        metrics::counter!("animals_registered_total", "species" => species.label()).increment(1);
        tracing::info!(animal_id = record.id, species = %species, "Animal registered");

        Ok(Registration {
            record,
            sound,
            description,
        })
    }

    /// Returns stored animal counts for every species, including zeroes.
    pub async fn census(&self) -> Result<Vec<(Species, i64)>, AppError> {
        let counts = self.repository.count_by_species().await?;

        Ok(Species::ALL
            .into_iter()
            .map(|species| {
                let count = counts
                    .iter()
                    .find(|(s, _)| *s == species)
                    .map_or(0, |(_, c)| *c);
                (species, count)
            })
            .collect())
    }

    /// Checks that the animal store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
