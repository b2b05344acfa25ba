//! JSON API handlers for paper search

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::{SecondsFormat, Utc};
use folio_search::{FeedEntry, SearchError, SearchMetadata, SearchRequest};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::server::AppState;

/// Error message returned when the upstream request times out.
const TIMEOUT_MESSAGE: &str =
    "ArXiv API request timed out. Please try again later or with a more specific query.";

/// Error message returned for unclassified upstream failures.
const FAILURE_MESSAGE: &str = "Failed to fetch from arXiv API";

/// JSON envelope returned by the search endpoint.
#[derive(Serialize)]
pub struct SearchResponse {
    /// Normalized feed entries for the requested page
    pub data: Vec<FeedEntry>,
    /// Feed-level pagination counters
    pub metadata: SearchMetadata,
    /// Human-readable failure description, omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let request = SearchRequest::from_query_params(&params);
    debug!("searching arXiv with query: {}", request.search_expression());

    match state.search_service.search(&request).await {
        Ok(page) => (
            StatusCode::OK,
            Json(SearchResponse {
                data: page.entries,
                metadata: page.metadata,
                error: None,
            }),
        )
            .into_response(),
        Err(SearchError::UpstreamStatus { status }) => {
            warn!("arXiv returned status {status}");
            let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (
                code,
                Json(json!({
                    "error": format!("API request failed with status {status}"),
                })),
            )
                .into_response()
        }
        Err(SearchError::Timeout { reason }) => {
            warn!("arXiv request timed out: {reason}");
            (
                StatusCode::GATEWAY_TIMEOUT,
                Json(SearchResponse {
                    data: Vec::new(),
                    metadata: SearchMetadata {
                        title: "Search Results (Error)".to_string(),
                        id: String::new(),
                        updated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                        total_results: 0,
                        start: 0,
                        items_per_page: 10,
                    },
                    error: Some(TIMEOUT_MESSAGE.to_string()),
                }),
            )
                .into_response()
        }
        Err(error) => {
            warn!("search failed: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SearchResponse {
                    data: Vec::new(),
                    metadata: SearchMetadata {
                        title: String::new(),
                        id: String::new(),
                        updated: String::new(),
                        total_results: 0,
                        start: 0,
                        items_per_page: 10,
                    },
                    error: Some(FAILURE_MESSAGE.to_string()),
                }),
            )
                .into_response()
        }
    }
}
