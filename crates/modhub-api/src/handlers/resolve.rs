//! Identifier resolution handler.

use axum::Json;
use axum::extract::{Query, State};

use modhub_core::traits::Capability;

use crate::dto::request::ResolveQuery;
use crate::dto::response::{ApiResponse, ResolveResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/resolve?identifier=&kind=&capability=
pub async fn resolve(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<ApiResponse<ResolveResponse>>, ApiError> {
    let capability = query.capability.as_deref().map(Capability::new);
    let resolved = state
        .registry
        .resolve(&query.identifier, &query.kind, capability.as_ref())?;

    Ok(Json(ApiResponse::ok(ResolveResponse {
        identifier: query.identifier,
        qualified_name: resolved.qualified_name().to_string(),
        resolved,
    })))
}
