//! Provider implementations for paper search functionality.

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::query::SearchRequest;
use crate::types::SearchPage;

pub mod arxiv;
pub mod fixture;
pub mod mock;

pub use arxiv::ArxivProvider;
pub use fixture::FixtureProvider;
#[cfg(test)]
pub use mock::MockProvider;

/// Trait for paper search providers.
///
/// Implementations answer search requests through different backends
/// (the public arXiv API, deterministic fixture data, mock providers
/// for testing).
#[async_trait]
pub trait PaperSearchProvider: Send + Sync + std::fmt::Debug {
    /// Fetches one page of papers matching the request.
    ///
    /// # Errors
    /// - `SearchError::UpstreamStatus` - API answered with a non-success status
    /// - `SearchError::Timeout` - Request exceeded the configured timeout
    /// - `SearchError::NetworkError` - Network connectivity issues
    /// - `SearchError::ParseError` - Response was not a valid Atom feed
    async fn search_papers(&self, request: &SearchRequest) -> Result<SearchPage, SearchError>;
}
