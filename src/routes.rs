//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: database, image store (public)
//! - `/api/*`            - REST API (keeper session resolved from Bearer token)
//! - `GET  /images/*`    - Stored photos
//!
//! # Middleware
//!
//! - **Trailing slash** - `/api/species/` is served as `/api/species`
//! - **Tracing** - Structured request/response logging
//! - **Session** - Bearer token to keeper resolution on `/api/*`

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{session, tracing};
use crate::domain::entities::IMAGE_URL_PREFIX;
use crate::state::AppState;
use axum::extract::Request;
use axum::routing::{IntoMakeService, get};
use axum::{Router, ServiceExt, middleware};
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `image_dir` - directory photos are served from; must be the one the
///   image store writes to
pub fn app_router(state: AppState, image_dir: &Path) -> Router {
    let api_router = api::routes::routes(state.max_image_bytes).route_layer(
        middleware::from_fn_with_state(state.clone(), session::layer),
    );

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service(IMAGE_URL_PREFIX, ServeDir::new(image_dir))
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps [`app_router`] with trailing slash normalization, ready to serve.
///
/// Normalization has to run before routing, so it wraps the whole router
/// instead of being added with `Router::layer`.
pub fn app_service(state: AppState, image_dir: &Path) -> IntoMakeService<NormalizePath<Router>> {
    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state, image_dir));
    ServiceExt::<Request>::into_make_service(app)
}
