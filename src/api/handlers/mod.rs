//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod animals;
pub mod health;
pub mod images;
pub mod session;
pub mod species;

pub use animals::register_animal_handler;
pub use health::health_handler;
pub use images::upload_image_handler;
pub use session::session_handler;
pub use species::species_list_handler;
