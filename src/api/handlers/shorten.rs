//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "shortId": "x7k2pq", "shortUrl": "short.url/x7k2pq" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is empty or lacks an accepted scheme.
/// Returns 503 Service Unavailable if the backend fails or times out.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state.link_service.shorten(&payload.url).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}
