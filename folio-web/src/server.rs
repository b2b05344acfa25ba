//! Tailwind web server for Folio
//!
//! Serves the server-rendered search pages and the JSON search API.

use axum::Router;
use axum::routing::get;
use folio_search::{PaperSearchService, RuntimeMode};
use tower_http::cors::CorsLayer;

use crate::config::WebServerConfig;
use crate::handlers::{api_search, home_page, search_page};

/// Shared state for all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Search service answering both the JSON API and the HTML pages
    pub search_service: PaperSearchService,
}

/// Builds the application router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(home_page))
        .route("/search", get(search_page))
        // JSON API endpoints (for external clients)
        .route("/api/search", get(api_search))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the web server until the process is stopped.
///
/// # Errors
/// Returns an error when the listen address is unavailable or the
/// server fails while serving.
pub async fn run_server(
    config: WebServerConfig,
    mode: RuntimeMode,
) -> Result<(), Box<dyn std::error::Error>> {
    let search_service = PaperSearchService::from_runtime_mode(mode);
    let state = AppState { search_service };
    let app = router(state);

    println!(
        "Folio research server running on http://{}",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
