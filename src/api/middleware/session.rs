//! Keeper session middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Resolves the caller into a [`crate::domain::entities::Session`] request extension.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Resolution
///
/// 1. No `Authorization` header: the request continues as `Session::Anonymous`
/// 2. Bearer token present: it is hashed and looked up in the keeper store
/// 3. Valid token: the request continues as `Session::Keeper`
///
/// Handlers decide whether an anonymous session is acceptable.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is present but malformed, or the
/// token is unknown or revoked.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = if parts.headers.contains_key(header::AUTHORIZATION) {
        let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
            .await
            .map_err(|_| {
                AppError::unauthorized(
                    "Unauthorized",
                    serde_json::json!({"reason": "Authorization header is invalid"}),
                )
            })?;
        Some(token)
    } else {
        None
    };

    let session = st.session_service.resolve(token.as_deref()).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
