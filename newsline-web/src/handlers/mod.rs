//! HTTP request handlers organized by functionality

pub mod api;

// Re-export handler functions
pub use api::{ApiEnvelope, SearchParams, api_health, get_article_infos, get_company_names};
