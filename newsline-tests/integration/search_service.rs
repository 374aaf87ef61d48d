//! Search service behavior across crate boundaries.

use newsline_core::config::NewslineConfig;
use newsline_core::mode::RuntimeMode;
use newsline_search::ArticleSearchService;

#[tokio::test]
async fn test_development_mode_serves_deterministic_fixtures() {
    let config = NewslineConfig::for_testing();
    let service = ArticleSearchService::from_runtime_mode(RuntimeMode::Development, &config.search);

    let first = service.article_infos(&[], "", "", 0, 50).await.unwrap();
    let second = service.article_infos(&[], "", "", 0, 50).await.unwrap();

    assert_eq!(first, second);
    assert!(first.total > 0);
}

#[tokio::test]
async fn test_paging_is_consistent_with_totals() {
    let service = ArticleSearchService::new_demo();

    let all = service.article_infos(&[], "", "", 0, 50).await.unwrap();
    let first = service.article_infos(&[], "", "", 0, 3).await.unwrap();
    let second = service.article_infos(&[], "", "", 1, 3).await.unwrap();

    assert_eq!(first.total, all.total);
    assert_eq!(second.total, all.total);
    assert_eq!(first.articles.as_slice(), &all.articles[..3]);
    assert_eq!(second.articles.as_slice(), &all.articles[3..6]);
}

#[tokio::test]
async fn test_company_filter_narrows_results() {
    let service = ArticleSearchService::new_demo();

    let all = service.article_infos(&[], "", "", 0, 50).await.unwrap();
    let acme = service.article_infos(&[], "Acme", "", 0, 50).await.unwrap();

    assert!(acme.total < all.total);
    assert!(acme.articles.iter().all(|a| a.company == "Acme"));
}
