//! End-to-end search workflow test
//!
//! Walks a full demo-mode session: landing page, a search with rendered
//! results, paging through the whole result set and re-sorting it.

use std::collections::HashSet;
use std::net::SocketAddr;

use folio_search::PaperSearchService;
use folio_web::{AppState, router};

async fn spawn_demo_app() -> SocketAddr {
    let state = AppState {
        search_service: PaperSearchService::new_demo(),
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

async fn get_text(addr: SocketAddr, path_and_query: &str) -> String {
    let response = reqwest::get(format!("http://{addr}{path_and_query}"))
        .await
        .expect("request test app");
    assert!(response.status().is_success(), "{path_and_query}");
    response.text().await.expect("read response body")
}

#[tokio::test]
async fn test_home_page_offers_search() {
    let addr = spawn_demo_app().await;

    let html = get_text(addr, "/").await;

    assert!(html.contains("Folio"));
    assert!(html.contains("Find relevant papers, faster"));
    assert!(html.contains(r#"action="/search""#));
    assert!(html.contains("Does exercise improve cognition?"));
}

#[tokio::test]
async fn test_search_page_renders_results_and_pagination() {
    let addr = spawn_demo_app().await;

    let html = get_text(addr, "/search?query=relativity").await;

    assert!(html.contains("37 results for &quot;relativity&quot;"));
    assert!(html.contains("A Study of relativity, Part 1"));
    assert!(html.contains("arXiv: 2401.00001v1"));
    assert!(html.contains("View on arXiv"));
    assert!(html.contains("Showing 1 - 10 of 37 results"));
    // Filters sidebar with the sort select and category boxes
    assert!(html.contains("Sort By"));
    assert!(html.contains("Computer Science"));
    assert!(html.contains("Apply Filters"));
}

#[tokio::test]
async fn test_search_page_deep_link_prefills_state() {
    let addr = spawn_demo_app().await;

    let html = get_text(
        addr,
        "/search?query=relativity&start=10&sort_by=date_new&categories=cs",
    )
    .await;

    assert!(html.contains("Showing 11 - 20 of 37 results"));
    assert!(html.contains(r#"<option value="date_new" selected>"#));
    assert!(html.contains(r#"value="relativity""#));
    assert!(html.contains(">Clear</a>"));
}

#[tokio::test]
async fn test_oldest_first_reverses_the_feed() {
    let addr = spawn_demo_app().await;

    let html = get_text(addr, "/search?query=relativity&sort_by=date_old").await;

    assert!(html.contains("arXiv: 2401.00037v1"));
    assert!(html.contains("A Study of relativity, Part 37"));
}

#[tokio::test]
async fn test_paging_covers_the_whole_result_set() {
    let addr = spawn_demo_app().await;
    let mut seen = HashSet::new();

    for start in [0u64, 10, 20, 30] {
        let body: serde_json::Value = reqwest::get(format!(
            "http://{addr}/api/search?query=relativity&start={start}"
        ))
        .await
        .expect("request page")
        .json()
        .await
        .expect("parse page");

        let entries = body["data"].as_array().expect("data array");
        let expected = if start == 30 { 7 } else { 10 };
        assert_eq!(entries.len(), expected, "page at start={start}");

        for entry in entries {
            let id = entry["id"].as_str().expect("entry id").to_string();
            assert!(seen.insert(id), "duplicate entry across pages");
        }
    }

    assert_eq!(seen.len(), 37);
}

#[tokio::test]
async fn test_no_results_state_renders() {
    let addr = spawn_demo_app().await;

    // Start beyond the fixture set produces an empty page
    let html = get_text(addr, "/search?query=relativity&start=50").await;

    assert!(html.contains("No results found"));
    assert!(html.contains("Try adjusting your search query or filters"));
}
