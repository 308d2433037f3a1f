//! Result page handler: link details, statistics and tabs.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use tracing::warn;

use crate::domain::entities::{CountEntry, RecentClick, ResolvedLink};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::display::{format_lifetime, format_views};

/// Tab selected on the result page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResultTab {
    #[default]
    Stats,
    QrCode,
    Settings,
}

impl ResultTab {
    /// Parses the `?tab=` value; anything unknown falls back to [`ResultTab::Stats`].
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("qrcode") => Self::QrCode,
            Some("settings") => Self::Settings,
            _ => Self::Stats,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::QrCode => "qrcode",
            Self::Settings => "settings",
        }
    }

    pub fn is_stats(&self) -> bool {
        *self == Self::Stats
    }

    pub fn is_qrcode(&self) -> bool {
        *self == Self::QrCode
    }

    pub fn is_settings(&self) -> bool {
        *self == Self::Settings
    }
}

#[derive(Debug, Deserialize)]
pub struct ResultQuery {
    pub tab: Option<String>,
}

/// Template for the result page.
///
/// Dates and counters are preformatted; `conversion_rate` is a whole percent.
#[derive(Template, WebTemplate)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub token: String,
    pub original_url: String,
    pub short_url: String,
    pub visit_url: String,
    pub created_at: String,
    pub expires_at: String,
    pub views: u64,
    /// `views` with its noun, e.g. `1 visualização`.
    pub views_label: String,
    pub unique_visitors: u64,
    pub conversion_rate: u32,
    pub countries: Vec<CountEntry>,
    pub devices: Vec<CountEntry>,
    pub recent_clicks: Vec<RecentClick>,
    pub tab: ResultTab,
    /// How long links live, e.g. `1 ano` or `30 dias`.
    pub validity: String,
    pub current_year: i32,
}

impl ResultTemplate {
    pub fn new(resolved: ResolvedLink, tab: ResultTab) -> Self {
        let ResolvedLink { link, stats } = resolved;
        let conversion_rate = stats.conversion_rate_percent();

        Self {
            created_at: link.created_at_display(),
            expires_at: link.expires_at_display(),
            visit_url: link.visit_url(),
            validity: format_lifetime(link.lifetime_days()),
            token: link.short_id,
            original_url: link.original_url,
            short_url: link.short_url,
            views: stats.views,
            views_label: format_views(stats.views),
            unique_visitors: stats.unique_visitors,
            conversion_rate,
            countries: stats.countries,
            devices: stats.devices,
            recent_clicks: stats.recent_clicks,
            tab,
            current_year: Utc::now().year(),
        }
    }
}

/// Alternate page shown when a result cannot be displayed.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub title: String,
    pub message: String,
}

impl NotFoundTemplate {
    pub fn missing() -> Self {
        Self {
            title: "URL não encontrada".to_string(),
            message: "Não foi possível encontrar informações para esta URL encurtada.".to_string(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            title: "URL não encontrada".to_string(),
            message: "Não foi possível carregar as informações desta URL. Tente novamente."
                .to_string(),
        }
    }
}

/// Renders the result page for a token.
///
/// # Endpoint
///
/// `GET /result/{token}?tab=stats|qrcode|settings`
///
/// # Responses
///
/// - **200 OK** with the link card and the selected tab
/// - **404 Not Found** with the "URL não encontrada" page
/// - **503 Service Unavailable** with the same page when the backend fails
pub async fn result_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Query(query): Query<ResultQuery>,
) -> Response {
    let tab = ResultTab::from_query(query.tab.as_deref());

    match state.link_service.resolve(&token).await {
        Ok(resolved) => ResultTemplate::new(resolved, tab).into_response(),
        Err(AppError::NotFound { .. }) => {
            (StatusCode::NOT_FOUND, NotFoundTemplate::missing()).into_response()
        }
        Err(e) => {
            warn!(token = %token, error = %e, "Failed to load result page");
            (e.status(), NotFoundTemplate::unavailable()).into_response()
        }
    }
}
