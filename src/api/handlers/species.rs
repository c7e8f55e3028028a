//! Handler for the species catalogue.

use axum::Json;

use crate::api::dto::species::SpeciesListResponse;

/// Lists the species the registration form accepts.
///
/// # Endpoint
///
/// `GET /api/species`
pub async fn species_list_handler() -> Json<SpeciesListResponse> {
    Json(SpeciesListResponse::all())
}
