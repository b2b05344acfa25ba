//! JSON contract tests for the `/api/search` endpoint.
//!
//! Each test boots the real router on an ephemeral port and talks to it
//! over HTTP, the way an external client would.

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use folio_search::{
    PaperSearchProvider, PaperSearchService, SearchError, SearchPage, SearchRequest,
};
use folio_web::{AppState, router};

/// Provider that fails every search with a configured error kind.
#[derive(Debug, Clone, Copy)]
enum FailureKind {
    Timeout,
    UpstreamStatus(u16),
    Network,
}

#[derive(Debug)]
struct FailingProvider {
    kind: FailureKind,
}

#[async_trait]
impl PaperSearchProvider for FailingProvider {
    async fn search_papers(&self, _request: &SearchRequest) -> Result<SearchPage, SearchError> {
        Err(match self.kind {
            FailureKind::Timeout => SearchError::Timeout {
                reason: "deadline has elapsed".to_string(),
            },
            FailureKind::UpstreamStatus(status) => SearchError::UpstreamStatus { status },
            FailureKind::Network => SearchError::NetworkError {
                reason: "connection refused".to_string(),
            },
        })
    }
}

async fn spawn_app(service: PaperSearchService) -> SocketAddr {
    let state = AppState {
        search_service: service,
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });

    addr
}

async fn spawn_failing_app(kind: FailureKind) -> SocketAddr {
    let provider = Arc::new(FailingProvider { kind });
    spawn_app(PaperSearchService::with_provider(provider)).await
}

async fn get_json(addr: SocketAddr, path_and_query: &str) -> (reqwest::StatusCode, serde_json::Value) {
    let response = reqwest::get(format!("http://{addr}{path_and_query}"))
        .await
        .expect("request test app");
    let status = response.status();
    let body = response.json().await.expect("parse response body");
    (status, body)
}

#[tokio::test]
async fn test_search_returns_data_and_metadata() {
    let addr = spawn_app(PaperSearchService::new_demo()).await;

    let (status, body) = get_json(addr, "/api/search?query=heat%20equation").await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(10));
    assert_eq!(body["metadata"]["totalResults"], 37);
    assert_eq!(body["metadata"]["start"], 0);
    assert_eq!(body["metadata"]["itemsPerPage"], 10);
    assert!(body.get("error").is_none());

    // Entries expose the normalized feed shape
    let first = &body["data"][0];
    assert!(first["id"].as_str().is_some_and(|id| id.contains("/abs/")));
    assert!(first["title"].as_str().is_some());
    assert!(first["summary"].as_str().is_some());
    assert!(first["author"].is_array());
    assert!(first["author"][0]["name"].as_str().is_some());
}

#[tokio::test]
async fn test_search_honors_pagination_params() {
    let addr = spawn_app(PaperSearchService::new_demo()).await;

    let (status, body) = get_json(addr, "/api/search?query=heat&start=10&max_results=5").await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["metadata"]["start"], 10);
    assert_eq!(body["metadata"]["itemsPerPage"], 5);
}

#[tokio::test]
async fn test_empty_query_returns_empty_page() {
    let addr = spawn_app(PaperSearchService::new_demo()).await;

    let (status, body) = get_json(addr, "/api/search").await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
    assert_eq!(body["metadata"]["totalResults"], 0);
}

#[tokio::test]
async fn test_page_past_the_end_pins_counters() {
    let addr = spawn_app(PaperSearchService::new_demo()).await;

    let (status, body) = get_json(addr, "/api/search?query=heat&start=40").await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
    assert_eq!(body["metadata"]["totalResults"], 0);
    assert_eq!(body["metadata"]["start"], 40);
    assert_eq!(body["metadata"]["itemsPerPage"], 10);
}

#[tokio::test]
async fn test_invalid_params_fall_back_to_defaults() {
    let addr = spawn_app(PaperSearchService::new_demo()).await;

    let (status, body) = get_json(
        addr,
        "/api/search?query=heat&start=abc&max_results=-3&sort_by=banana",
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(10));
    assert_eq!(body["metadata"]["start"], 0);
    assert_eq!(body["metadata"]["itemsPerPage"], 10);
}

#[tokio::test]
async fn test_upstream_status_passes_through() {
    let addr = spawn_failing_app(FailureKind::UpstreamStatus(503)).await;

    let (status, body) = get_json(addr, "/api/search?query=heat").await;

    assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "API request failed with status 503");
    // Error-only body on status passthrough
    assert!(body.get("data").is_none());
    assert!(body.get("metadata").is_none());
}

#[tokio::test]
async fn test_timeout_maps_to_gateway_timeout() {
    let addr = spawn_failing_app(FailureKind::Timeout).await;

    let (status, body) = get_json(addr, "/api/search?query=heat").await;

    assert_eq!(status, reqwest::StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(
        body["error"],
        "ArXiv API request timed out. Please try again later or with a more specific query."
    );
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
    assert_eq!(body["metadata"]["title"], "Search Results (Error)");
    assert_eq!(body["metadata"]["totalResults"], 0);
    assert_eq!(body["metadata"]["itemsPerPage"], 10);
    assert!(
        body["metadata"]["updated"]
            .as_str()
            .is_some_and(|updated| !updated.is_empty())
    );
}

#[tokio::test]
async fn test_network_failure_maps_to_internal_error() {
    let addr = spawn_failing_app(FailureKind::Network).await;

    let (status, body) = get_json(addr, "/api/search?query=heat").await;

    assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to fetch from arXiv API");
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
    assert_eq!(body["metadata"]["title"], "");
    assert_eq!(body["metadata"]["updated"], "");
    assert_eq!(body["metadata"]["itemsPerPage"], 10);
}
