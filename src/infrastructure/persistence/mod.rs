//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//! The schema lives in `migrations/` and is applied at startup.
//!
//! # Repositories
//!
//! - [`PgAnimalRepository`] - Animal records (`animals` table)
//! - [`PgKeeperRepository`] - Keeper tokens (`keepers` table)

pub mod pg_animal_repository;
pub mod pg_keeper_repository;

pub use pg_animal_repository::PgAnimalRepository;
pub use pg_keeper_repository::PgKeeperRepository;
