//! Domain layer: animals, dispatch and collaborator interfaces.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures ([`entities::Animal`] and friends)
//! - [`dispatch`] - Species label to variant mapping
//! - [`repositories`] - Storage trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Workflows live in services (see [`crate::application::services`])
//!
//! # Registration Flow
//!
//! 1. HTTP handler validates the submitted form
//! 2. [`dispatch::dispatch`] turns the species label into an [`entities::Animal`]
//! 3. The animal is described, logged and stored via [`repositories::AnimalRepository`]
//! 4. The stored record and the animal's sound are returned to the caller

pub mod dispatch;
pub mod entities;
pub mod repositories;
