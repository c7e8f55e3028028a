//! Business logic services for the application layer.

pub mod animal_service;
pub mod image_service;
pub mod session_service;

pub use animal_service::{AnimalService, Registration};
pub use image_service::ImageService;
pub use session_service::SessionService;
