//! Newsline Web - JSON API Server

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Serves the article search API: thin delegate handlers that forward
//! request parameters to the search service and wrap its result in the
//! fixed `{status, message, content}` response envelope.

pub mod handlers;
pub mod server;

// Re-export main types
pub use server::{AppState, build_router, run_server};
