//! URL input form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::warn;
use validator::Validate;

use crate::api::dto::shorten::ShortenRequest;
use crate::error::{AppError, SHORTEN_FAILED_MESSAGE};
use crate::state::AppState;

/// Template for the URL input page.
///
/// Renders `templates/index.html`. `url` refills the input after a failed
/// submission and `error` is shown below it.
#[derive(Template, WebTemplate, Default)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub url: String,
    pub error: Option<String>,
}

impl IndexTemplate {
    fn with_error(url: String, error: impl Into<String>) -> Self {
        Self {
            url,
            error: Some(error.into()),
        }
    }
}

/// Renders the empty input form.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate::default()
}

/// Shortens the submitted URL and navigates to its result page.
///
/// # Endpoint
///
/// `POST /` (`application/x-www-form-urlencoded`)
///
/// # Responses
///
/// - **303 See Other** to `/result/{token}` on success
/// - **422 Unprocessable Entity** with the validation message next to the input;
///   the body is checked with the same rules as `POST /api/shorten`
/// - **503 Service Unavailable** with a generic retry message when the
///   backend fails or times out
pub async fn submit_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenRequest>,
) -> Response {
    let outcome = match form.validate() {
        Ok(()) => state.link_service.shorten(&form.url).await,
        Err(errors) => Err(AppError::from(errors)),
    };

    match outcome {
        Ok(link) => Redirect::to(&format!("/result/{}", link.short_id)).into_response(),
        Err(AppError::Validation { message, .. }) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            IndexTemplate::with_error(form.url, message),
        )
            .into_response(),
        Err(e) => {
            warn!(error = %e, "Form submission failed");
            (
                e.status(),
                IndexTemplate::with_error(form.url, SHORTEN_FAILED_MESSAGE),
            )
                .into_response()
        }
    }
}
