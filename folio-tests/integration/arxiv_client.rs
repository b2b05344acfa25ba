//! arXiv client tests against a stub upstream endpoint.
//!
//! A local axum server stands in for the arXiv API so the provider's
//! wire format, status handling and timeout behavior can be verified
//! without leaving the machine.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::Query;
use axum::http::{StatusCode, header};
use axum::routing::get;
use folio_search::{
    ArxivProvider, PaperSearchProvider, SearchConfig, SearchError, SearchRequest, SortOrder,
};

const ARXIV_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">
  <title type="html">ArXiv Query: search_query=heat AND (cat:cs OR cat:math)</title>
  <id>http://arxiv.org/api/rbRBSCyL1xWbbkX9Tc9kNuIDPRc</id>
  <updated>2024-01-16T00:00:00-05:00</updated>
  <opensearch:totalResults>212</opensearch:totalResults>
  <opensearch:startIndex>0</opensearch:startIndex>
  <opensearch:itemsPerPage>10</opensearch:itemsPerPage>
  <entry>
    <id>http://arxiv.org/abs/2401.10001v1</id>
    <updated>2024-01-15T12:00:00Z</updated>
    <published>2024-01-14T09:00:00Z</published>
    <title>Heat Kernels on Graphs</title>
    <summary>We study discrete heat kernels.</summary>
    <author><name>Ada Lovelace</name></author>
    <author><name>Alan Turing</name></author>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/2401.10002v2</id>
    <updated>2024-01-13T08:30:00Z</updated>
    <published>2024-01-12T16:45:00Z</published>
    <title>A Survey of
      Parabolic Equations</title>
    <summary>Long lines
      wrapped by the feed.</summary>
    <author><name>Emmy Noether</name></author>
  </entry>
</feed>"#;

async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });

    format!("http://{addr}/api/query")
}

fn provider_for(endpoint: String) -> ArxivProvider {
    let config = SearchConfig {
        endpoint,
        request_timeout: Duration::from_millis(500),
        ..SearchConfig::default()
    };
    ArxivProvider::new(config)
}

#[tokio::test]
async fn test_fetches_and_parses_feed() {
    let captured: Arc<Mutex<Option<HashMap<String, String>>>> = Arc::new(Mutex::new(None));
    let captured_by_handler = captured.clone();

    let app = Router::new().route(
        "/api/query",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let captured = captured_by_handler.clone();
            async move {
                *captured.lock().unwrap() = Some(params);
                (
                    [(header::CONTENT_TYPE, "application/atom+xml; charset=UTF-8")],
                    ARXIV_FEED,
                )
            }
        }),
    );
    let endpoint = spawn_upstream(app).await;

    let request = SearchRequest {
        query: "heat".to_string(),
        start: 20,
        max_results: 10,
        sort: SortOrder::NewestFirst,
        categories: vec!["cs".to_string(), "math".to_string()],
    };
    let page = provider_for(endpoint)
        .search_papers(&request)
        .await
        .expect("search against stub");

    assert_eq!(page.metadata.total_results, 212);
    assert_eq!(page.entries.len(), 2);
    assert_eq!(page.entries[0].title, "Heat Kernels on Graphs");
    assert_eq!(page.entries[0].authors.len(), 2);
    // Whitespace runs inside wrapped elements collapse to single spaces
    assert_eq!(page.entries[1].title, "A Survey of Parabolic Equations");
    assert_eq!(page.entries[1].summary, "Long lines wrapped by the feed.");

    let params = captured.lock().unwrap().take().expect("captured params");
    assert_eq!(
        params.get("search_query").map(String::as_str),
        Some("heat AND (cat:cs OR cat:math)")
    );
    assert_eq!(params.get("start").map(String::as_str), Some("20"));
    assert_eq!(params.get("max_results").map(String::as_str), Some("10"));
    assert_eq!(params.get("sortBy").map(String::as_str), Some("submittedDate"));
    assert_eq!(params.get("sortOrder").map(String::as_str), Some("descending"));
}

#[tokio::test]
async fn test_relevance_sort_sends_no_sort_params() {
    let captured: Arc<Mutex<Option<HashMap<String, String>>>> = Arc::new(Mutex::new(None));
    let captured_by_handler = captured.clone();

    let app = Router::new().route(
        "/api/query",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let captured = captured_by_handler.clone();
            async move {
                *captured.lock().unwrap() = Some(params);
                ARXIV_FEED
            }
        }),
    );
    let endpoint = spawn_upstream(app).await;

    let request = SearchRequest::new("heat");
    provider_for(endpoint)
        .search_papers(&request)
        .await
        .expect("search against stub");

    let params = captured.lock().unwrap().take().expect("captured params");
    assert_eq!(params.get("search_query").map(String::as_str), Some("heat"));
    assert!(!params.contains_key("sortBy"));
    assert!(!params.contains_key("sortOrder"));
}

#[tokio::test]
async fn test_upstream_error_status_is_reported() {
    let app = Router::new().route(
        "/api/query",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let endpoint = spawn_upstream(app).await;

    let error = provider_for(endpoint)
        .search_papers(&SearchRequest::new("heat"))
        .await
        .expect_err("stub returns 503");

    assert_eq!(error.upstream_status(), Some(503));
    assert_eq!(error.to_string(), "API request failed with status 503");
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let app = Router::new().route(
        "/api/query",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            ARXIV_FEED
        }),
    );
    let endpoint = spawn_upstream(app).await;

    let error = provider_for(endpoint)
        .search_papers(&SearchRequest::new("heat"))
        .await
        .expect_err("stub is slower than the timeout");

    assert!(error.is_timeout());
}

#[tokio::test]
async fn test_malformed_feed_is_a_parse_error() {
    let app = Router::new().route(
        "/api/query",
        get(|| async { "<feed><entry><title>broken</entry></feed>" }),
    );
    let endpoint = spawn_upstream(app).await;

    let error = provider_for(endpoint)
        .search_papers(&SearchRequest::new("heat"))
        .await
        .expect_err("stub serves malformed XML");

    assert!(matches!(error, SearchError::ParseError { .. }));
}
