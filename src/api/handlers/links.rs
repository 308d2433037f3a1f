//! Handler for link resolution endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a link and its statistics.
///
/// # Endpoint
///
/// `GET /api/links/{token}`
///
/// # Errors
///
/// Returns 404 Not Found if the token does not resolve.
/// Returns 503 Service Unavailable if the backend fails or times out.
pub async fn link_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let resolved = state.link_service.resolve(&token).await?;

    Ok(Json(resolved.into()))
}
