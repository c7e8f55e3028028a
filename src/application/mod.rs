//! Application layer services implementing the registry workflows.
//!
//! Services coordinate dispatch, validation results and repository calls,
//! and provide a small API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::animal_service::AnimalService`] - Animal registration
//! - [`services::image_service::ImageService`] - Photo uploads
//! - [`services::session_service::SessionService`] - Keeper session resolution

pub mod services;
