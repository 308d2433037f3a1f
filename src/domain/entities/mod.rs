//! Core domain entities.
//!
//! - [`ShortLink`] - An original URL paired with its token
//! - [`UsageStats`] - Click and visitor analytics for a link
//! - [`ResolvedLink`] - A link together with a stats snapshot
//!
//! Entities are plain data; serialization lives in the API DTOs.

pub mod link;
pub mod stats;

pub use link::ShortLink;
pub use stats::{CountEntry, RecentClick, ResolvedLink, UsageStats};
