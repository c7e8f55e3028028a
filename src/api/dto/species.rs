//! DTOs for the species catalogue.

use serde::Serialize;

use crate::domain::entities::Species;

/// One selectable species and the sound it makes.
#[derive(Debug, Serialize)]
pub struct SpeciesItem {
    pub species: Species,
    pub sound: &'static str,
}

/// All species accepted by the registration form.
#[derive(Debug, Serialize)]
pub struct SpeciesListResponse {
    pub items: Vec<SpeciesItem>,
}

impl SpeciesListResponse {
    pub fn all() -> Self {
        Self {
            items: Species::ALL
                .into_iter()
                .map(|species| SpeciesItem {
                    species,
                    sound: species.sound(),
                })
                .collect(),
        }
    }
}
