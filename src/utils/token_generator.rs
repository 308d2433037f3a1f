//! Short token generation and format checks.
//!
//! Tokens are drawn uniformly from the lowercase base-36 alphabet, which keeps
//! them URL-safe without any encoding step.

use rand::Rng;

/// Characters a token may contain.
pub const TOKEN_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Token length used when none is configured.
pub const DEFAULT_TOKEN_LENGTH: usize = 6;

/// Shortest configurable token length.
pub const MIN_TOKEN_LENGTH: usize = 4;

/// Longest configurable token length.
pub const MAX_TOKEN_LENGTH: usize = 16;

/// Generates a pseudo-random base-36 token of exactly `length` characters.
///
/// No uniqueness is guaranteed; storing backends detect collisions on insert.
///
/// # Examples
///
/// ```ignore
/// let token = generate_token(6);
/// assert_eq!(token.len(), 6);
/// assert!(is_valid_token(&token));
/// ```
pub fn generate_token(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

/// Returns `true` if `token` could have been produced by [`generate_token`].
///
/// Only the character set and the length bounds are checked.
pub fn is_valid_token(token: &str) -> bool {
    (1..=MAX_TOKEN_LENGTH).contains(&token.len())
        && token
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
}
