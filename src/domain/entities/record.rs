//! Persisted animal records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Species;

/// An animal row as stored by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimalRecord {
    pub id: i64,
    pub name: String,
    pub age: f64,
    pub species: Species,
    pub enclosure: String,
    pub image_key: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Input data for storing a new animal.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnimalRecord {
    pub name: String,
    pub age: f64,
    pub species: Species,
    pub enclosure: String,
    pub image_key: String,
    pub owner_id: i64,
}
