//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Animal`] - One animal, a closed enum over [`Species`]
//! - [`AnimalRecord`] - An animal as persisted, with owner and photo key
//! - [`Keeper`] / [`Session`] - Who is making a request
//! - [`StoredImage`] - A photo accepted by the image store
//!
//! Creation inputs use separate structs (`NewAnimalRecord`), following the
//! same split as the persisted types.

pub mod animal;
pub mod image;
pub mod keeper;
pub mod record;

pub use animal::{Animal, Profile, Species};
pub use image::{IMAGE_URL_PREFIX, StoredImage};
pub use keeper::{Keeper, KeeperToken, Session};
pub use record::{AnimalRecord, NewAnimalRecord};
