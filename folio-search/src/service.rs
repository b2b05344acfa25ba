//! Paper search service facade.
//!
//! Thin coordination layer over a pluggable provider: it owns the
//! empty-query short-circuit and pins pagination metadata on empty
//! result pages so clients can render stable pagination controls.

use std::sync::Arc;

use tracing::debug;

use crate::config::SearchConfig;
use crate::errors::SearchError;
use crate::mode::RuntimeMode;
use crate::providers::{ArxivProvider, FixtureProvider, PaperSearchProvider};
use crate::query::SearchRequest;
use crate::types::SearchPage;

/// Paper search service backed by a pluggable provider.
#[derive(Debug, Clone)]
pub struct PaperSearchService {
    provider: Arc<dyn PaperSearchProvider>,
}

impl PaperSearchService {
    /// Creates a service that queries the public arXiv API.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            provider: Arc::new(ArxivProvider::new(config)),
        }
    }

    /// Creates a service serving deterministic fixture data.
    ///
    /// Used for UI development and demos without external API calls.
    pub fn new_demo() -> Self {
        Self {
            provider: Arc::new(FixtureProvider::new()),
        }
    }

    /// Selects the provider for the given runtime mode.
    ///
    /// Development mode serves fixture data; production queries arXiv
    /// with environment-derived configuration.
    pub fn from_runtime_mode(mode: RuntimeMode) -> Self {
        if mode.is_development() {
            Self::new_demo()
        } else {
            Self::new(SearchConfig::from_env())
        }
    }

    /// Creates a service around an explicit provider.
    pub fn with_provider(provider: Arc<dyn PaperSearchProvider>) -> Self {
        Self { provider }
    }

    /// Runs one search and returns the normalized result page.
    ///
    /// An empty or whitespace-only query returns an empty page without
    /// contacting the provider. A page that comes back without entries
    /// has its counters pinned to the request (`totalResults` 0, the
    /// requested offset and page size) so pagination stays stable.
    ///
    /// # Errors
    /// - `SearchError::UpstreamStatus` - API answered with a non-success status
    /// - `SearchError::Timeout` - Upstream request exceeded the timeout
    /// - `SearchError::NetworkError` - Network connectivity issues
    /// - `SearchError::ParseError` - Response was not a valid Atom feed
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchPage, SearchError> {
        if request.query.trim().is_empty() {
            debug!("empty search query, skipping provider call");
            return Ok(SearchPage::empty(request.start, request.max_results));
        }

        let mut page = self.provider.search_papers(request).await?;
        if page.entries.is_empty() {
            page.metadata.total_results = 0;
            page.metadata.start = request.start;
            page.metadata.items_per_page = request.max_results;
        }
        Ok(page)
    }
}

impl Default for PaperSearchService {
    fn default() -> Self {
        Self::new_demo()
    }
}
