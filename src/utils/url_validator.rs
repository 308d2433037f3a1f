//! Validation rule for URLs submitted for shortening.

use std::borrow::Cow;

use validator::ValidationError;

/// Schemes a submitted URL may start with.
pub const ACCEPTED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Why a submitted URL was rejected.
///
/// The `Display` text is shown to the user next to the input field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlInputError {
    #[error("Por favor, insira uma URL")]
    Empty,

    #[error("URL deve começar com http:// ou https://")]
    UnsupportedScheme,
}

/// Checks a user-submitted URL and returns it without surrounding whitespace.
///
/// The input is accepted when it is non-empty and starts with one of
/// [`ACCEPTED_SCHEMES`]. Nothing else about the URL is inspected.
///
/// # Errors
///
/// - [`UrlInputError::Empty`] for empty or whitespace-only input
/// - [`UrlInputError::UnsupportedScheme`] for any other prefix
pub fn validate_url_input(input: &str) -> Result<&str, UrlInputError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlInputError::Empty);
    }

    if !ACCEPTED_SCHEMES
        .iter()
        .any(|scheme| trimmed.starts_with(scheme))
    {
        return Err(UrlInputError::UnsupportedScheme);
    }

    Ok(trimmed)
}

/// `validator` adapter for [`validate_url_input`], used by request DTOs.
pub fn validate_url_field(value: &str) -> Result<(), ValidationError> {
    validate_url_input(value).map(|_| ()).map_err(|e| {
        let code = match e {
            UrlInputError::Empty => "url_empty",
            UrlInputError::UnsupportedScheme => "url_scheme",
        };
        ValidationError::new(code).with_message(Cow::Owned(e.to_string()))
    })
}
