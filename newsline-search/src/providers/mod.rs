//! Provider implementations for article search functionality.

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::types::{ArticleQuery, SearchContent};

pub mod demo;
pub mod mock;
pub mod opensearch;

pub use demo::DemoProvider;
#[cfg(test)]
pub use mock::MockProvider;
pub use opensearch::OpenSearchProvider;

/// Trait for article search providers.
///
/// Implementations answer search criteria from different backends
/// (live index, demo fixtures, mock providers for testing).
#[async_trait]
pub trait ArticleSearchProvider: Send + Sync + std::fmt::Debug {
    /// Searches for articles matching the criteria, returning one result page.
    ///
    /// # Errors
    /// - `SearchError::SearchFailed` - the backend rejected the query
    /// - `SearchError::NetworkError` - connectivity to the backend failed
    /// - `SearchError::ParseError` - the backend response could not be decoded
    async fn search_articles(
        &self,
        criteria: &ArticleQuery,
    ) -> Result<SearchContent, SearchError>;
}
