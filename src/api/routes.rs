//! API route configuration.
//!
//! Every API route runs behind [`crate::api::middleware::session`], so
//! handlers always receive a `Session` extension.

use crate::api::handlers::{
    register_animal_handler, session_handler, species_list_handler, upload_image_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};

/// API routes, without the session layer.
///
/// # Endpoints
///
/// - `GET  /species`             - Species labels and sounds
/// - `GET  /session`             - Current session
/// - `POST /animals`             - Register an animal (keeper only)
/// - `PUT  /images/{file_name}`  - Upload a photo (keeper only)
pub fn routes(max_image_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/species", get(species_list_handler))
        .route("/session", get(session_handler))
        .route("/animals", post(register_animal_handler))
        .route(
            "/images/{file_name}",
            put(upload_image_handler).layer(DefaultBodyLimit::max(max_image_bytes)),
        )
}
