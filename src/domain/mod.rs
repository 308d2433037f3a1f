//! Domain layer containing business entities and contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//! - [`click_event`] - Click tracking event model
//! - [`click_worker`] - Asynchronous click processing worker
//! - [`expiry_sweeper`] - Periodic purge of expired links
//!
//! # Click Processing Flow
//!
//! 1. The redirect handler resolves a token and answers with a redirect
//! 2. A [`click_event::ClickEvent`] is pushed onto a bounded channel
//! 3. [`click_worker::run_click_worker`] hands it to the repository
//! 4. The repository folds it into the link's statistics

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod expiry_sweeper;
pub mod repositories;
