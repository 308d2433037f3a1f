//! Utility functions for token generation, input validation, and display.
//!
//! - [`client_ip`] - Visitor address, honouring proxy headers when configured
//! - [`token_generator`] - Base-36 token generation and format checks
//! - [`url_validator`] - Scheme check for submitted URLs
//! - [`display`] - Portuguese date and click-time formatting
//! - [`user_agent`] - Device classification for click statistics

pub mod client_ip;
pub mod display;
pub mod token_generator;
pub mod url_validator;
pub mod user_agent;
