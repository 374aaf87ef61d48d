//! Query DSL construction for the article index.

use serde_json::{Value, json};

use crate::types::ArticleQuery;

/// Builds the `_search` request body for the given criteria.
///
/// Free text becomes a `multi_match` over title and summary (title weighted
/// higher), hashtags a `terms` filter (any-of), the company a `term` filter.
/// An empty query matches everything. Results page with `from`/`size` and
/// sort newest first.
pub fn search_body(criteria: &ArticleQuery) -> Value {
    let must = if criteria.query.trim().is_empty() {
        json!({ "match_all": {} })
    } else {
        json!({
            "multi_match": {
                "query": criteria.query,
                "fields": ["title^2", "summary"]
            }
        })
    };

    let mut filter = Vec::new();
    if !criteria.hashtags.is_empty() {
        filter.push(json!({ "terms": { "hashtags": criteria.hashtags } }));
    }
    if !criteria.company.is_empty() {
        filter.push(json!({ "term": { "company": criteria.company } }));
    }

    json!({
        "from": criteria.offset(),
        "size": criteria.size,
        "query": {
            "bool": {
                "must": [must],
                "filter": filter
            }
        },
        "sort": [{ "published_at": { "order": "desc" } }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_is_match_all() {
        let body = search_body(&ArticleQuery::default());

        assert!(body["query"]["bool"]["must"][0]["match_all"].is_object());
        assert_eq!(body["from"], 0);
        assert_eq!(body["size"], 10);
    }

    #[test]
    fn test_free_text_becomes_multi_match() {
        let criteria = ArticleQuery {
            query: "funding round".to_string(),
            ..ArticleQuery::default()
        };

        let body = search_body(&criteria);
        let multi_match = &body["query"]["bool"]["must"][0]["multi_match"];

        assert_eq!(multi_match["query"], "funding round");
        assert_eq!(multi_match["fields"][0], "title^2");
        assert_eq!(multi_match["fields"][1], "summary");
    }

    #[test]
    fn test_hashtags_and_company_become_filters() {
        let criteria = ArticleQuery {
            hashtags: vec!["ai".to_string(), "ml".to_string()],
            company: "Acme".to_string(),
            ..ArticleQuery::default()
        };

        let body = search_body(&criteria);
        let filter = body["query"]["bool"]["filter"].as_array().unwrap();

        assert_eq!(filter.len(), 2);
        assert_eq!(filter[0]["terms"]["hashtags"][0], "ai");
        assert_eq!(filter[0]["terms"]["hashtags"][1], "ml");
        assert_eq!(filter[1]["term"]["company"], "Acme");
    }

    #[test]
    fn test_empty_criteria_produce_no_filters() {
        let body = search_body(&ArticleQuery::default());

        assert_eq!(body["query"]["bool"]["filter"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_paging_offsets_into_the_index() {
        let criteria = ArticleQuery {
            page: 2,
            size: 10,
            ..ArticleQuery::default()
        };

        let body = search_body(&criteria);

        assert_eq!(body["from"], 20);
        assert_eq!(body["size"], 10);
    }

    #[test]
    fn test_sorts_newest_first() {
        let body = search_body(&ArticleQuery::default());

        assert_eq!(body["sort"][0]["published_at"]["order"], "desc");
    }
}
