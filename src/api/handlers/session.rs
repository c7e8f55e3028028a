//! Handler for session introspection.

use axum::{Extension, Json};

use crate::api::dto::session::SessionResponse;
use crate::domain::entities::Session;

/// Returns the caller's session.
///
/// # Endpoint
///
/// `GET /api/session`
///
/// Anonymous callers get `{"authenticated": false}`.
pub async fn session_handler(Extension(session): Extension<Session>) -> Json<SessionResponse> {
    Json(session.into())
}
