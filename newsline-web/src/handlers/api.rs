//! API handlers for article search

use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use newsline_search::SearchContent;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::server::AppState;

/// Fixed response envelope returned by the JSON endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    /// Application-level status code, mirroring HTTP on success
    pub status: u16,
    /// Human-readable status message
    pub message: String,
    /// Endpoint-specific payload
    pub content: T,
}

impl<T> ApiEnvelope<T> {
    /// Wraps content in the success envelope: status 200, message "ok".
    pub fn ok(content: T) -> Self {
        Self {
            status: 200,
            message: "ok".to_string(),
            content,
        }
    }
}

/// Query parameters accepted by the article search endpoint.
///
/// `hashtags` repeats (`hashtags=ai&hashtags=ml`); anything missing falls
/// back to the client defaults: empty filters, first page, ten results.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchParams {
    /// Hashtag filters, possibly repeated
    pub hashtags: Vec<String>,
    /// Company filter; empty selects all companies
    pub company: String,
    /// Free-text query
    pub query: String,
    /// Zero-based page number
    pub page: u32,
    /// Page size
    pub size: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            hashtags: Vec::new(),
            company: String::new(),
            query: String::new(),
            page: 0,
            size: 10,
        }
    }
}

fn user_id(headers: &HeaderMap) -> &str {
    headers
        .get("X-User-ID")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("anonymous")
}

/// `GET /api/articles` - searches the article index.
///
/// Forwards the criteria verbatim to the search service and returns the
/// service result untouched inside the success envelope.
///
/// # Errors
/// - `400 Bad Request` - the query string could not be decoded
/// - `500 Internal Server Error` - the delegated search call failed
pub async fn get_article_infos(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Result<Json<ApiEnvelope<SearchContent>>, StatusCode> {
    let params: SearchParams = serde_html_form::from_str(raw.as_deref().unwrap_or(""))
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    tracing::info!(
        user_id = user_id(&headers),
        query = %params.query,
        company = %params.company,
        hashtags = ?params.hashtags,
        page = params.page,
        size = params.size,
        "article search"
    );

    let content = state
        .search_service
        .article_infos(
            &params.hashtags,
            &params.company,
            &params.query,
            params.page,
            params.size,
        )
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "article search failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(ApiEnvelope::ok(content)))
}

/// `GET /api/companies` - company-name listing.
///
/// Not implemented: responds 501 with no body.
pub async fn get_company_names(headers: HeaderMap) -> StatusCode {
    // TODO: aggregate company names from the article index
    tracing::debug!(user_id = user_id(&headers), "company names requested");
    StatusCode::NOT_IMPLEMENTED
}

/// `GET /api/health` - liveness probe.
pub async fn api_health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_seconds": state.started_at.elapsed().as_secs(),
    }))
}
