//! Live article-index provider speaking the OpenSearch `_search` protocol.

use std::time::Duration;

use async_trait::async_trait;
use newsline_core::config::SearchConfig;
use serde::Deserialize;

use super::ArticleSearchProvider;
use crate::errors::SearchError;
use crate::query;
use crate::types::{ArticleInfo, ArticleQuery, SearchContent};

/// Search provider backed by an OpenSearch-compatible article index.
///
/// Posts the query DSL built by [`query::search_body`] to the index's
/// `_search` endpoint and maps hits back to typed articles.
#[derive(Debug)]
pub struct OpenSearchProvider {
    client: reqwest::Client,
    base_url: String,
    index: String,
    request_timeout: Duration,
}

/// Response from the index `_search` endpoint.
#[derive(Debug, Deserialize)]
struct IndexResponse {
    hits: IndexHits,
}

#[derive(Debug, Deserialize)]
struct IndexHits {
    total: IndexTotal,
    hits: Vec<IndexHit>,
}

#[derive(Debug, Deserialize)]
struct IndexTotal {
    value: u64,
}

#[derive(Debug, Deserialize)]
struct IndexHit {
    #[serde(rename = "_source")]
    source: ArticleInfo,
}

impl OpenSearchProvider {
    /// Creates a provider from the search section of the configuration.
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            index: config.index.clone(),
            request_timeout: config.request_timeout,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/{}/_search", self.base_url, self.index)
    }
}

#[async_trait]
impl ArticleSearchProvider for OpenSearchProvider {
    async fn search_articles(
        &self,
        criteria: &ArticleQuery,
    ) -> Result<SearchContent, SearchError> {
        let url = self.search_url();
        let body = query::search_body(criteria);
        tracing::debug!(%url, offset = criteria.offset(), size = criteria.size, "querying article index");

        let response = self
            .client
            .post(&url)
            .timeout(self.request_timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::NetworkError {
                reason: format!("index request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(SearchError::SearchFailed {
                query: criteria.query.clone(),
                reason: format!("index returned HTTP {}", response.status()),
            });
        }

        let parsed: IndexResponse =
            response
                .json()
                .await
                .map_err(|e| SearchError::ParseError {
                    reason: format!("index response decoding failed: {e}"),
                })?;

        Ok(SearchContent {
            total: parsed.hits.total.value,
            page: criteria.page,
            size: criteria.size,
            articles: parsed.hits.hits.into_iter().map(|hit| hit.source).collect(),
        })
    }
}
