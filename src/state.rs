//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AnimalService, ImageService, SessionService};

/// Services shared across requests.
///
/// Cloning is cheap; every field is reference counted and immutable.
#[derive(Clone)]
pub struct AppState {
    pub animal_service: Arc<AnimalService>,
    pub image_service: Arc<ImageService>,
    pub session_service: Arc<SessionService>,
    /// Maximum accepted photo size in bytes.
    pub max_image_bytes: usize,
}

impl AppState {
    pub fn new(
        animal_service: Arc<AnimalService>,
        image_service: Arc<ImageService>,
        session_service: Arc<SessionService>,
        max_image_bytes: usize,
    ) -> Self {
        Self {
            animal_service,
            image_service,
            session_service,
            max_image_bytes,
        }
    }
}
