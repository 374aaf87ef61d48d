//! Demo provider with deterministic fixture articles.
//!
//! Keeps the whole search workflow usable offline: filtering, paging, and
//! ordering behave like the live index, just over a small fixed corpus.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use super::ArticleSearchProvider;
use crate::errors::SearchError;
use crate::types::{ArticleInfo, ArticleQuery, SearchContent};

/// Offline provider serving a fixed set of tech-blog articles.
///
/// The corpus is deterministic, so responses for the same criteria are
/// always identical across processes and runs.
#[derive(Debug, Default)]
pub struct DemoProvider;

impl DemoProvider {
    /// Creates a new demo provider.
    pub fn new() -> Self {
        Self
    }

    fn published(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
            .single()
            .unwrap_or_default()
    }

    fn corpus() -> Vec<ArticleInfo> {
        vec![
            ArticleInfo {
                id: "acme-funding-round".to_string(),
                title: "Inside Our Series B: What the Funding Round Means for Engineering"
                    .to_string(),
                url: "https://techblog.acme.example/funding-round".to_string(),
                company: "Acme".to_string(),
                hashtags: vec!["AI".to_string(), "ML".to_string(), "Startup".to_string()],
                summary: Some(
                    "How the funding round changes our platform roadmap and hiring.".to_string(),
                ),
                published_at: Self::published(2024, 6, 3),
            },
            ArticleInfo {
                id: "globex-ingest-rust".to_string(),
                title: "Rewriting Our Ingest Pipeline in Rust".to_string(),
                url: "https://techblog.globex.example/ingest-rust".to_string(),
                company: "Globex".to_string(),
                hashtags: vec!["Rust".to_string(), "DataEngineering".to_string()],
                summary: Some("What we learned moving ingest off the JVM.".to_string()),
                published_at: Self::published(2024, 5, 21),
            },
            ArticleInfo {
                id: "hooli-event-driven".to_string(),
                title: "Migrating a Monolith to Event-Driven Services".to_string(),
                url: "https://techblog.hooli.example/event-driven".to_string(),
                company: "Hooli".to_string(),
                hashtags: vec!["Kafka".to_string(), "Architecture".to_string()],
                summary: Some("A two-year migration, one topic at a time.".to_string()),
                published_at: Self::published(2024, 5, 2),
            },
            ArticleInfo {
                id: "acme-edge-inference".to_string(),
                title: "Serving Transformer Models at the Edge".to_string(),
                url: "https://techblog.acme.example/edge-inference".to_string(),
                company: "Acme".to_string(),
                hashtags: vec![
                    "AI".to_string(),
                    "Inference".to_string(),
                    "Rust".to_string(),
                ],
                summary: Some(
                    "Latency lessons from moving inference close to users.".to_string(),
                ),
                published_at: Self::published(2024, 4, 18),
            },
            ArticleInfo {
                id: "initech-incident-reviews".to_string(),
                title: "A Year of Incident Reviews".to_string(),
                url: "https://techblog.initech.example/incident-reviews".to_string(),
                company: "Initech".to_string(),
                hashtags: vec!["SRE".to_string(), "Culture".to_string()],
                summary: None,
                published_at: Self::published(2024, 3, 27),
            },
            ArticleInfo {
                id: "globex-postgres-partitioning".to_string(),
                title: "Postgres Partitioning Lessons at Billion-Row Scale".to_string(),
                url: "https://techblog.globex.example/postgres-partitioning".to_string(),
                company: "Globex".to_string(),
                hashtags: vec!["Postgres".to_string(), "Database".to_string()],
                summary: Some("Partition pruning, detach concurrency, and vacuum.".to_string()),
                published_at: Self::published(2024, 2, 9),
            },
            ArticleInfo {
                id: "initech-search-caching".to_string(),
                title: "Caching Strategies for Search Traffic".to_string(),
                url: "https://techblog.initech.example/search-caching".to_string(),
                company: "Initech".to_string(),
                hashtags: vec!["Search".to_string(), "Performance".to_string()],
                summary: Some("Request coalescing and negative caching in front of the index."
                    .to_string()),
                published_at: Self::published(2024, 1, 15),
            },
        ]
    }

    fn matches(article: &ArticleInfo, criteria: &ArticleQuery) -> bool {
        let company_ok = criteria.company.is_empty()
            || article.company.eq_ignore_ascii_case(&criteria.company);

        // Any-of, like the index terms filter
        let hashtags_ok = criteria.hashtags.is_empty()
            || criteria.hashtags.iter().any(|wanted| {
                article
                    .hashtags
                    .iter()
                    .any(|tag| tag.eq_ignore_ascii_case(wanted))
            });

        let text = criteria.query.trim().to_lowercase();
        let query_ok = text.is_empty()
            || article.title.to_lowercase().contains(&text)
            || article
                .summary
                .as_deref()
                .is_some_and(|summary| summary.to_lowercase().contains(&text));

        company_ok && hashtags_ok && query_ok
    }
}

#[async_trait]
impl ArticleSearchProvider for DemoProvider {
    async fn search_articles(
        &self,
        criteria: &ArticleQuery,
    ) -> Result<SearchContent, SearchError> {
        let mut matched: Vec<ArticleInfo> = Self::corpus()
            .into_iter()
            .filter(|article| Self::matches(article, criteria))
            .collect();

        matched.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        let total = matched.len() as u64;
        let articles = matched
            .into_iter()
            .skip(criteria.offset() as usize)
            .take(criteria.size as usize)
            .collect();

        Ok(SearchContent {
            total,
            page: criteria.page,
            size: criteria.size,
            articles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn search(criteria: ArticleQuery) -> SearchContent {
        DemoProvider::new().search_articles(&criteria).await.unwrap()
    }

    #[tokio::test]
    async fn test_blank_criteria_match_whole_corpus() {
        let content = search(ArticleQuery {
            size: 50,
            ..ArticleQuery::default()
        })
        .await;

        assert_eq!(content.total, 7);
        assert_eq!(content.articles.len(), 7);
    }

    #[tokio::test]
    async fn test_results_are_newest_first() {
        let content = search(ArticleQuery {
            size: 50,
            ..ArticleQuery::default()
        })
        .await;

        for pair in content.articles.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
    }

    #[tokio::test]
    async fn test_company_filter_is_exact_and_case_insensitive() {
        let content = search(ArticleQuery {
            company: "acme".to_string(),
            ..ArticleQuery::default()
        })
        .await;

        assert_eq!(content.total, 2);
        assert!(content.articles.iter().all(|a| a.company == "Acme"));
    }

    #[tokio::test]
    async fn test_hashtag_filter_matches_any_requested_tag() {
        let content = search(ArticleQuery {
            hashtags: vec!["postgres".to_string(), "kafka".to_string()],
            ..ArticleQuery::default()
        })
        .await;

        assert_eq!(content.total, 2);
        for article in &content.articles {
            assert!(article.hashtags.iter().any(|tag| {
                tag.eq_ignore_ascii_case("postgres") || tag.eq_ignore_ascii_case("kafka")
            }));
        }
    }

    #[tokio::test]
    async fn test_free_text_searches_title_and_summary() {
        let by_title = search(ArticleQuery {
            query: "funding round".to_string(),
            ..ArticleQuery::default()
        })
        .await;
        assert_eq!(by_title.articles[0].id, "acme-funding-round");

        let by_summary = search(ArticleQuery {
            query: "vacuum".to_string(),
            ..ArticleQuery::default()
        })
        .await;
        assert_eq!(by_summary.total, 1);
        assert_eq!(by_summary.articles[0].id, "globex-postgres-partitioning");
    }

    #[tokio::test]
    async fn test_combined_filters_intersect() {
        let content = search(ArticleQuery {
            hashtags: vec!["ai".to_string(), "ml".to_string()],
            company: "Acme".to_string(),
            query: "funding round".to_string(),
            ..ArticleQuery::default()
        })
        .await;

        assert_eq!(content.total, 1);
        assert_eq!(content.articles[0].id, "acme-funding-round");
    }

    #[tokio::test]
    async fn test_paging_is_disjoint_and_keeps_total() {
        let first = search(ArticleQuery {
            size: 3,
            ..ArticleQuery::default()
        })
        .await;
        let second = search(ArticleQuery {
            page: 1,
            size: 3,
            ..ArticleQuery::default()
        })
        .await;

        assert_eq!(first.total, 7);
        assert_eq!(second.total, 7);
        assert_eq!(first.articles.len(), 3);
        assert_eq!(second.articles.len(), 3);
        for article in &second.articles {
            assert!(first.articles.iter().all(|a| a.id != article.id));
        }
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty() {
        let content = search(ArticleQuery {
            page: 9,
            size: 10,
            ..ArticleQuery::default()
        })
        .await;

        assert_eq!(content.total, 7);
        assert!(content.articles.is_empty());
    }

    #[tokio::test]
    async fn test_responses_are_deterministic() {
        let criteria = ArticleQuery {
            hashtags: vec!["rust".to_string()],
            ..ArticleQuery::default()
        };

        let first = search(criteria.clone()).await;
        let second = search(criteria).await;

        assert_eq!(first, second);
    }
}
