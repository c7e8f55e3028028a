//! Handler for photo uploads.

use axum::{
    Extension, Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};

use crate::domain::entities::{Session, StoredImage};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a photo sent as the raw request body.
///
/// # Endpoint
///
/// `PUT /api/images/{file_name}`
///
/// The returned `key` is what the registration form sends as `image`.
///
/// # Response
///
/// ```json
/// {
///   "key": "Xk2p9QaZ0bLm-rex.png",
///   "url": "/images/Xk2p9QaZ0bLm-rex.png",
///   "size": 48213
/// }
/// ```
///
/// # Errors
///
/// - 400 for an invalid file name, unsupported extension or empty body
/// - 401 without a keeper session
/// - 413 if the body exceeds `MAX_IMAGE_BYTES`
pub async fn upload_image_handler(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(file_name): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<StoredImage>), AppError> {
    let image = state
        .image_service
        .upload(&session, &file_name, body.to_vec())
        .await?;

    Ok((StatusCode::CREATED, Json(image)))
}
