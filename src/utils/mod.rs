//! Helper functions used across the application.
//!
//! - [`image_key`] - Photo storage keys and file name validation

pub mod image_key;
