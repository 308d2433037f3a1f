//! Infrastructure layer implementing the domain storage contract.
//!
//! # Modules
//!
//! - [`backends`] - Demo and in-memory link repositories

pub mod backends;
