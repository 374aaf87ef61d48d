//! Article search service delegating to a pluggable provider.

use std::sync::Arc;

use newsline_core::config::SearchConfig;
use newsline_core::mode::RuntimeMode;

use crate::errors::SearchError;
use crate::providers::{ArticleSearchProvider, DemoProvider, OpenSearchProvider};
use crate::types::{ArticleQuery, SearchContent};

/// Article search service fronting the configured provider.
///
/// Clones are cheap and share the underlying provider.
#[derive(Debug, Clone)]
pub struct ArticleSearchService {
    provider: Arc<dyn ArticleSearchProvider>,
}

impl ArticleSearchService {
    /// Creates a service backed by the live article index.
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            provider: Arc::new(OpenSearchProvider::new(config)),
        }
    }

    /// Creates a service backed by deterministic demo fixtures.
    ///
    /// Keeps the full search workflow usable without an index, for offline
    /// development and integration tests.
    pub fn new_demo() -> Self {
        Self {
            provider: Arc::new(DemoProvider::new()),
        }
    }

    /// Selects the provider matching the runtime mode.
    pub fn from_runtime_mode(mode: RuntimeMode, config: &SearchConfig) -> Self {
        match mode {
            RuntimeMode::Production => Self::new(config),
            RuntimeMode::Development => Self::new_demo(),
        }
    }

    /// Creates a service around an explicit provider.
    pub fn with_provider(provider: Arc<dyn ArticleSearchProvider>) -> Self {
        Self { provider }
    }

    /// Creates a service with a mock provider for testing.
    #[cfg(test)]
    fn new_with_mock() -> Self {
        Self::with_provider(Arc::new(crate::providers::MockProvider::new()))
    }

    /// Searches articles for the given parameter tuple.
    ///
    /// Parameters are forwarded to the provider verbatim and the returned
    /// content is exactly what the provider produced.
    ///
    /// # Errors
    /// - `SearchError::SearchFailed` - the backend rejected the query
    /// - `SearchError::NetworkError` - connectivity to the backend failed
    /// - `SearchError::ParseError` - the backend response could not be decoded
    pub async fn article_infos(
        &self,
        hashtags: &[String],
        company: &str,
        query: &str,
        page: u32,
        size: u32,
    ) -> Result<SearchContent, SearchError> {
        let criteria = ArticleQuery {
            hashtags: hashtags.to_vec(),
            company: company.to_string(),
            query: query.to_string(),
            page,
            size,
        };
        self.provider.search_articles(&criteria).await
    }
}
