#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use zoo_registry::application::services::session_service::token_digest;
use zoo_registry::application::services::{AnimalService, ImageService, SessionService};
use zoo_registry::domain::entities::{AnimalRecord, Keeper, KeeperToken, NewAnimalRecord, Species};
use zoo_registry::domain::repositories::{AnimalRepository, KeeperRepository};
use zoo_registry::error::AppError;
use zoo_registry::infrastructure::storage::LocalImageStore;
use zoo_registry::routes::app_service;
use zoo_registry::state::AppState;

pub const SIGNING_SECRET: &str = "test-signing-secret";
pub const KEEPER_TOKEN: &str = "keeper-token";
pub const MAX_IMAGE_BYTES: usize = 1024;
/// A well-formed key as returned by the upload endpoint.
pub const REX_IMAGE: &str = "Xk2p9QaZ0bLm-rex.png";

/// In-memory animal store. `failing` makes every write fail.
#[derive(Default)]
pub struct InMemoryAnimals {
    pub records: Mutex<Vec<AnimalRecord>>,
    pub failing: bool,
}

#[async_trait]
impl AnimalRepository for InMemoryAnimals {
    async fn create(&self, new_animal: NewAnimalRecord) -> Result<AnimalRecord, AppError> {
        if self.failing {
            return Err(AppError::persistence("Database error", json!({})));
        }

        let mut records = self.records.lock().unwrap();
        let record = AnimalRecord {
            id: records.len() as i64 + 1,
            name: new_animal.name,
            age: new_animal.age,
            species: new_animal.species,
            enclosure: new_animal.enclosure,
            image_key: new_animal.image_key,
            owner_id: new_animal.owner_id,
            created_at: Utc::now(),
        };
        records.push(record.clone());
        Ok(record)
    }

    async fn count_by_species(&self) -> Result<Vec<(Species, i64)>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(Species::ALL
            .into_iter()
            .map(|s| (s, records.iter().filter(|r| r.species == s).count() as i64))
            .filter(|(_, count)| *count > 0)
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.failing {
            return Err(AppError::persistence("Database error", json!({})));
        }
        Ok(())
    }
}

/// Keeper store that knows a single keeper holding [`KEEPER_TOKEN`].
pub struct SingleKeeper {
    pub keeper: Keeper,
    token_hash: String,
}

impl Default for SingleKeeper {
    fn default() -> Self {
        Self {
            keeper: Keeper {
                id: 1,
                name: "Ana".to_string(),
            },
            token_hash: token_digest(SIGNING_SECRET, KEEPER_TOKEN),
        }
    }
}

impl SingleKeeper {
    fn token(&self) -> KeeperToken {
        KeeperToken {
            id: self.keeper.id,
            name: self.keeper.name.clone(),
            token_hash: self.token_hash.clone(),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        }
    }
}

#[async_trait]
impl KeeperRepository for SingleKeeper {
    async fn find_active_by_hash(&self, token_hash: &str) -> Result<Option<Keeper>, AppError> {
        Ok((token_hash == self.token_hash).then(|| self.keeper.clone()))
    }

    async fn touch(&self, _token_hash: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn create(&self, _name: &str, _token_hash: &str) -> Result<KeeperToken, AppError> {
        Err(AppError::conflict("Keeper store is read-only", json!({})))
    }

    async fn list(&self) -> Result<Vec<KeeperToken>, AppError> {
        Ok(vec![self.token()])
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<KeeperToken>, AppError> {
        Ok((id == self.keeper.id).then(|| self.token()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<KeeperToken>, AppError> {
        Ok((name == self.keeper.name).then(|| self.token()))
    }

    async fn revoke(&self, _id: i64) -> Result<(), AppError> {
        Ok(())
    }
}

/// A running test app and the collaborators behind it.
///
/// Keep the whole struct alive; dropping `image_dir` deletes stored photos.
pub struct TestApp {
    pub server: TestServer,
    pub animals: Arc<InMemoryAnimals>,
    pub image_dir: TempDir,
}

impl TestApp {
    /// Places a photo in the image directory as if it had been uploaded.
    pub fn seed_image(&self, key: &str) {
        std::fs::write(self.image_dir.path().join(key), b"png").unwrap();
    }
}

pub async fn create_test_state(animals: Arc<InMemoryAnimals>, image_dir: &TempDir) -> AppState {
    let image_store = Arc::new(LocalImageStore::open(image_dir.path()).await.unwrap());

    AppState::new(
        Arc::new(AnimalService::new(animals, image_store.clone())),
        Arc::new(ImageService::new(image_store)),
        Arc::new(SessionService::new(
            Arc::new(SingleKeeper::default()),
            SIGNING_SECRET.to_string(),
        )),
        MAX_IMAGE_BYTES,
    )
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(InMemoryAnimals::default()).await
}

pub async fn spawn_app_with(animals: InMemoryAnimals) -> TestApp {
    let animals = Arc::new(animals);
    let image_dir = TempDir::new().unwrap();

    let state = create_test_state(animals.clone(), &image_dir).await;
    let server = TestServer::new(app_service(state, image_dir.path())).unwrap();

    TestApp {
        server,
        animals,
        image_dir,
    }
}
