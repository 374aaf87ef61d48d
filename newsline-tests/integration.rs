//! Integration tests for Newsline
//!
//! Drives the real HTTP surface end to end: router, envelope, and search
//! service wired together the way the server binary runs them.

#[path = "integration/api_envelope.rs"]
mod api_envelope;

#[path = "integration/search_service.rs"]
mod search_service;
