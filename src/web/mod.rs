//! Server-rendered pages: the URL input form and the result view.
//!
//! Uses Askama templates from `templates/`; static assets live in `static/`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
