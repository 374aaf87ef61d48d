//! Mock provider implementation for testing.

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use super::ArticleSearchProvider;
#[cfg(test)]
use crate::errors::SearchError;
#[cfg(test)]
use crate::types::{ArticleInfo, ArticleQuery, SearchContent};

/// Mock provider echoing the request back as canned content.
///
/// The response is derived entirely from the criteria, which lets tests
/// assert that parameters pass through the service layer untouched.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockProvider;

#[cfg(test)]
impl MockProvider {
    /// Creates a new mock provider for testing.
    pub fn new() -> Self {
        Self
    }
}

#[cfg(test)]
#[async_trait]
impl ArticleSearchProvider for MockProvider {
    async fn search_articles(
        &self,
        criteria: &ArticleQuery,
    ) -> Result<SearchContent, SearchError> {
        let company = if criteria.company.is_empty() {
            "MockWorks".to_string()
        } else {
            criteria.company.clone()
        };

        Ok(SearchContent {
            total: 1,
            page: criteria.page,
            size: criteria.size,
            articles: vec![ArticleInfo {
                id: "mock-1".to_string(),
                title: format!("Mock article for '{}'", criteria.query),
                url: "https://blog.example.com/mock-1".to_string(),
                company,
                hashtags: criteria.hashtags.clone(),
                summary: Some("Mock summary".to_string()),
                published_at: chrono::DateTime::UNIX_EPOCH,
            }],
        })
    }
}
