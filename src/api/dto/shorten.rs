//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;
use crate::utils::url_validator::validate_url_field;

/// Request to shorten a URL, posted as JSON to the API or as a form body
/// from the input page.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL; must start with `http://` or `https://`.
    #[validate(length(max = 2048, message = "URL muito longa (máximo de 2048 caracteres)"))]
    #[validate(custom(function = "validate_url_field"))]
    #[serde(default)]
    pub url: String,
}

/// Token and display URL of the created link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_id: String,
    pub short_url: String,
}

impl From<ShortLink> for ShortenResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            short_id: link.short_id,
            short_url: link.short_url,
        }
    }
}
