//! DTOs for animal registration.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::application::services::Registration;
use crate::domain::entities::{AnimalRecord, Profile};
use crate::utils::image_key::validate_image_key;

/// Longest accepted name or enclosure, counted after trimming.
const MAX_TEXT_CHARS: usize = 100;

/// Registration form submitted by a keeper.
///
/// Field checks happen here, before the species label is dispatched.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterAnimalRequest {
    /// Species label, matched case-sensitively after validation.
    #[validate(custom(function = "not_blank", message = "Please select a species"))]
    pub species: String,

    #[validate(
        custom(function = "not_blank", message = "Please enter an animal name"),
        custom(function = "short_text", message = "Name must be at most 100 characters")
    )]
    pub name: String,

    /// Age in years; fractions are allowed for young animals.
    #[validate(range(
        exclusive_min = 0.0,
        max = 500.0,
        message = "Please enter a valid age"
    ))]
    pub age: f64,

    #[validate(
        custom(function = "not_blank", message = "Please select an enclosure"),
        custom(function = "short_text", message = "Enclosure must be at most 100 characters")
    )]
    pub enclosure: String,

    /// Key returned by the image upload endpoint.
    #[validate(
        custom(function = "not_blank", message = "Please select an image"),
        custom(
            function = "uploaded_image_key",
            message = "Image must be a key returned by the upload endpoint"
        )
    )]
    pub image: String,
}

impl RegisterAnimalRequest {
    /// Builds the profile from trimmed field values.
    pub fn profile(&self) -> Profile {
        Profile::new(self.name.trim(), self.age, self.enclosure.trim())
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn short_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() > MAX_TEXT_CHARS {
        return Err(ValidationError::new("length"));
    }
    Ok(())
}

/// Blank values are left to `not_blank`.
fn uploaded_image_key(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || validate_image_key(value).is_ok() {
        return Ok(());
    }
    Err(ValidationError::new("image_key"))
}

/// Stored animal together with its sound and description.
#[derive(Debug, Serialize)]
pub struct AnimalResponse {
    #[serde(flatten)]
    pub animal: AnimalRecord,
    pub sound: &'static str,
    pub description: String,
}

impl From<Registration> for AnimalResponse {
    fn from(registration: Registration) -> Self {
        Self {
            animal: registration.record,
            sound: registration.sound,
            description: registration.description,
        }
    }
}
