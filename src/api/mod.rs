//! HTTP API and embedded web UI.
//!
//! This module provides the axum-based HTTP server that serves the
//! to-do list page and exposes the task CRUD endpoints.

mod server;
pub mod templates;

pub use server::{AppState, build_router, start_server};
