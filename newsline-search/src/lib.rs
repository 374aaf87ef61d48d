//! Newsline Search - article search and discovery

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Fronts the crawled-article index behind a provider abstraction so the
//! HTTP layer and CLI can search tech-blog articles without knowing which
//! backend (live index, demo fixtures) answers the query.

pub mod errors;
pub mod providers;
pub mod query;
pub mod service;
pub mod types;

// Re-export main types
pub use errors::SearchError;
pub use service::ArticleSearchService;
pub use types::{ArticleInfo, ArticleQuery, SearchContent};

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
