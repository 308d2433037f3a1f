//! HTML page handlers.

mod index;
mod result;

pub use index::{IndexTemplate, index_handler, submit_handler};
pub use result::{NotFoundTemplate, ResultTab, ResultTemplate, result_handler};
