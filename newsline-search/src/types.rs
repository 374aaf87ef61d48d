//! Data types for article search functionality.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single crawled article as returned to API clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleInfo {
    /// Stable identifier of the article within the index
    pub id: String,
    /// Article headline
    pub title: String,
    /// Canonical URL of the article on the company blog
    pub url: String,
    /// Company whose blog published the article
    pub company: String,
    /// Hashtags attached by the tagging pipeline
    pub hashtags: Vec<String>,
    /// Short plain-text excerpt, when the crawler captured one
    #[serde(default)]
    pub summary: Option<String>,
    /// Publication time in UTC
    pub published_at: DateTime<Utc>,
}

/// One page of search results together with the index-reported total.
///
/// This is the `content` payload of the API envelope; the HTTP layer
/// forwards it to clients untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchContent {
    /// Total matching articles across all pages
    pub total: u64,
    /// Zero-based page this content covers
    pub page: u32,
    /// Requested page size
    pub size: u32,
    /// Articles on this page, newest first
    pub articles: Vec<ArticleInfo>,
}

/// Search criteria forwarded verbatim from the HTTP layer or CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleQuery {
    /// Hashtag filters; an article matches if it carries any of them
    pub hashtags: Vec<String>,
    /// Exact company filter; empty selects all companies
    pub company: String,
    /// Free-text query over title and summary; empty matches everything
    pub query: String,
    /// Zero-based page number
    pub page: u32,
    /// Page size
    pub size: u32,
}

impl ArticleQuery {
    /// Index offset of the first result on the requested page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for ArticleQuery {
    fn default() -> Self {
        // Mirrors the defaults the frontend criteria store starts from
        Self {
            hashtags: Vec::new(),
            company: String::new(),
            query: String::new(),
            page: 0,
            size: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria() {
        let criteria = ArticleQuery::default();

        assert!(criteria.hashtags.is_empty());
        assert!(criteria.company.is_empty());
        assert!(criteria.query.is_empty());
        assert_eq!(criteria.page, 0);
        assert_eq!(criteria.size, 10);
    }

    #[test]
    fn test_offset() {
        let criteria = ArticleQuery {
            page: 3,
            size: 25,
            ..ArticleQuery::default()
        };

        assert_eq!(criteria.offset(), 75);
    }

    #[test]
    fn test_offset_does_not_overflow() {
        let criteria = ArticleQuery {
            page: u32::MAX,
            size: u32::MAX,
            ..ArticleQuery::default()
        };

        assert_eq!(
            criteria.offset(),
            u64::from(u32::MAX) * u64::from(u32::MAX)
        );
    }

    #[test]
    fn test_article_serialization_roundtrip() {
        let article = ArticleInfo {
            id: "globex-ingest-rust".to_string(),
            title: "Rewriting Our Ingest Pipeline in Rust".to_string(),
            url: "https://techblog.globex.example/ingest-rust".to_string(),
            company: "Globex".to_string(),
            hashtags: vec!["Rust".to_string(), "DataEngineering".to_string()],
            summary: Some("What we learned moving ingest off the JVM.".to_string()),
            published_at: chrono::DateTime::UNIX_EPOCH,
        };

        let json = serde_json::to_string(&article).unwrap();
        let decoded: ArticleInfo = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, article);
    }

    #[test]
    fn test_article_summary_defaults_to_none() {
        let json = r#"{
            "id": "a-1",
            "title": "Title",
            "url": "https://blog.example/a-1",
            "company": "Acme",
            "hashtags": [],
            "published_at": "2024-05-02T09:00:00Z"
        }"#;

        let decoded: ArticleInfo = serde_json::from_str(json).unwrap();

        assert_eq!(decoded.summary, None);
    }
}
