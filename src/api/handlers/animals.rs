//! Handler for animal registration.

use axum::{Extension, Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::animal::{AnimalResponse, RegisterAnimalRequest};
use crate::domain::entities::Session;
use crate::error::AppError;
use crate::state::AppState;

/// Registers an animal for the calling keeper.
///
/// # Endpoint
///
/// `POST /api/animals`
///
/// # Request Body
///
/// ```json
/// {
///   "species": "Dog",
///   "name": "Rex",
///   "age": 3,
///   "enclosure": "East Yard",
///   "image": "Xk2p9QaZ0bLm-rex.png"
/// }
/// ```
///
/// # Response
///
/// `201 Created`, sent only after the record is stored:
///
/// ```json
/// {
///   "id": 1,
///   "name": "Rex",
///   "age": 3.0,
///   "species": "Dog",
///   "enclosure": "East Yard",
///   "image_key": "Xk2p9QaZ0bLm-rex.png",
///   "owner_id": 7,
///   "created_at": "2025-05-01T10:00:00Z",
///   "sound": "Woof woof",
///   "description": "Name: Rex, Age: 3, Species: Dog, Enclosure: East Yard"
/// }
/// ```
///
/// # Errors
///
/// - 400 `validation_error` for blank fields, a non-positive age, or an
///   `image` that was not returned by the upload endpoint
/// - 400 `unrecognized_species` for an unknown species label
/// - 401 `unauthorized` without a keeper session
/// - 500 `persistence_error` if the record could not be stored
pub async fn register_animal_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(payload): Json<RegisterAnimalRequest>,
) -> Result<(StatusCode, Json<AnimalResponse>), AppError> {
    payload.validate()?;

    let registration = state
        .animal_service
        .register(
            &session,
            &payload.species,
            payload.profile(),
            payload.image.trim().to_string(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(registration.into())))
}
