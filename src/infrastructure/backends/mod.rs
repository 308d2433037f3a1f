//! [`crate::domain::repositories::LinkRepository`] implementations.
//!
//! - [`DemoLinkRepository`] - fabricated record for any token, optional latency
//! - [`InMemoryLinkRepository`] - token-keyed map with click aggregation

pub mod demo;
pub mod memory;

pub use demo::{DEMO_ORIGINAL_URL, DemoLatency, DemoLinkRepository};
pub use memory::InMemoryLinkRepository;
