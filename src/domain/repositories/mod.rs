//! Repository trait definitions for the domain layer.
//!
//! These traits are the collaborator boundaries of the registry: the
//! application layer only talks to storage through them.
//!
//! # Available Repositories
//!
//! - [`AnimalRepository`] - Animal record storage
//! - [`KeeperRepository`] - Keeper token lookup and management
//! - [`ImageStore`] - Photo storage
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` under `cfg(test)`.
//! See `tests/repository_*.rs` for PostgreSQL-backed tests.

pub mod animal_repository;
pub mod image_store;
pub mod keeper_repository;

pub use animal_repository::AnimalRepository;
pub use image_store::ImageStore;
pub use keeper_repository::KeeperRepository;

#[cfg(test)]
pub use animal_repository::MockAnimalRepository;
#[cfg(test)]
pub use image_store::MockImageStore;
#[cfg(test)]
pub use keeper_repository::MockKeeperRepository;
