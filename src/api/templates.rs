//! HTML template for the web UI.
//!
//! The page is embedded at compile time using `include_str!` and served
//! at the root route.

/// The single-page to-do list UI.
pub const INDEX_TEMPLATE: &str = include_str!("templates/index.html");
