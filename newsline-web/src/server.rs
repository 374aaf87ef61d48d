//! HTTP server wiring for the Newsline JSON API.

use std::time::Instant;

use axum::Router;
use axum::routing::get;
use newsline_core::config::NewslineConfig;
use newsline_core::mode::RuntimeMode;
use newsline_core::{NewslineError, Result};
use newsline_search::ArticleSearchService;
use tower_http::cors::CorsLayer;

use crate::handlers::{api_health, get_article_infos, get_company_names};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Search service answering article queries
    pub search_service: ArticleSearchService,
    /// Server start time, reported by the health probe
    pub started_at: Instant,
}

impl AppState {
    /// Creates request state around the given search service.
    pub fn new(search_service: ArticleSearchService) -> Self {
        Self {
            search_service,
            started_at: Instant::now(),
        }
    }
}

/// Builds the API router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // JSON API endpoints
        .route("/api/articles", get(get_article_infos))
        .route("/api/companies", get(get_company_names))
        .route("/api/health", get(api_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the API server until the listener fails or the process stops.
///
/// # Errors
/// - `NewslineError::Configuration` - the bind host is empty
/// - `NewslineError::Io` - binding or serving the listener failed
pub async fn run_server(config: NewslineConfig, mode: RuntimeMode) -> Result<()> {
    if config.server.host.is_empty() {
        return Err(NewslineError::Configuration {
            reason: "server host must not be empty".to_string(),
        });
    }

    let search_service = ArticleSearchService::from_runtime_mode(mode, &config.search);
    let state = AppState::new(search_service);
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, %mode, "newsline api server listening");
    if mode.is_development() {
        tracing::info!("serving demo fixtures instead of the live index");
    }

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_host_is_a_configuration_error() {
        let mut config = NewslineConfig::for_testing();
        config.server.host = String::new();

        let err = run_server(config, RuntimeMode::Development)
            .await
            .unwrap_err();

        assert!(matches!(err, NewslineError::Configuration { .. }));
    }
}
