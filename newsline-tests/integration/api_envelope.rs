//! Envelope contract tests over real HTTP.

use newsline_search::{ArticleSearchService, SearchContent};
use newsline_web::{AppState, build_router};

/// Serves the demo-backed API on an ephemeral port and returns its base URL.
async fn spawn_demo_server() -> String {
    let state = AppState::new(ArticleSearchService::new_demo());
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_search_returns_ok_envelope() {
    let base = spawn_demo_server().await;

    let response = reqwest::get(format!("{base}/api/articles")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], 200);
    assert_eq!(body["message"], "ok");
    assert!(body["content"]["articles"].is_array());
}

#[tokio::test]
async fn test_search_content_equals_service_result() {
    let base = spawn_demo_server().await;
    let url = format!(
        "{base}/api/articles?hashtags=ai&hashtags=ml&company=Acme&query=funding+round&page=0&size=10"
    );

    let response = reqwest::Client::new()
        .get(&url)
        .header("X-User-ID", "user-42")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();

    let hashtags = vec!["ai".to_string(), "ml".to_string()];
    let expected = ArticleSearchService::new_demo()
        .article_infos(&hashtags, "Acme", "funding round", 0, 10)
        .await
        .unwrap();

    assert_eq!(body["status"], 200);
    assert_eq!(body["message"], "ok");
    let content: SearchContent = serde_json::from_value(body["content"].clone()).unwrap();
    assert_eq!(content, expected);
    assert!(content.total >= 1, "demo corpus carries a matching article");
}

#[tokio::test]
async fn test_repeated_hashtag_parameters_filter_results() {
    let base = spawn_demo_server().await;
    let url = format!("{base}/api/articles?hashtags=rust&size=50");

    let body: serde_json::Value = reqwest::get(&url).await.unwrap().json().await.unwrap();
    let content: SearchContent = serde_json::from_value(body["content"].clone()).unwrap();

    assert!(!content.articles.is_empty());
    for article in &content.articles {
        assert!(
            article
                .hashtags
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case("rust")),
            "article {} should carry the requested hashtag",
            article.id
        );
    }
}

#[tokio::test]
async fn test_malformed_page_parameter_is_bad_request() {
    let base = spawn_demo_server().await;
    let url = format!("{base}/api/articles?page=ten");

    let response = reqwest::get(&url).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_company_names_yields_framework_default() {
    let base = spawn_demo_server().await;

    let response = reqwest::Client::new()
        .get(format!("{base}/api/companies"))
        .header("X-User-ID", "user-42")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::NOT_IMPLEMENTED);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_health_probe_responds() {
    let base = spawn_demo_server().await;

    let body: serde_json::Value = reqwest::get(format!("{base}/api/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "ok");
    assert!(body["uptime_seconds"].is_u64());
}
