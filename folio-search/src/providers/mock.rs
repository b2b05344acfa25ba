//! Mock provider implementation for testing.

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use super::PaperSearchProvider;
#[cfg(test)]
use crate::errors::SearchError;
#[cfg(test)]
use crate::query::SearchRequest;
#[cfg(test)]
use crate::types::{Author, FeedEntry, SearchMetadata, SearchPage};

/// Mock provider for testing.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockProvider {
    page: Option<SearchPage>,
}

#[cfg(test)]
impl MockProvider {
    /// Creates a mock that answers every request with one fixed entry.
    pub fn new() -> Self {
        Self { page: None }
    }

    /// Creates a mock that answers every request with the given page.
    pub fn returning(page: SearchPage) -> Self {
        Self { page: Some(page) }
    }

    fn default_page() -> SearchPage {
        SearchPage {
            metadata: SearchMetadata {
                title: "ArXiv Query: mock".to_string(),
                id: "http://arxiv.org/api/mock".to_string(),
                updated: "2024-01-15T10:00:00Z".to_string(),
                total_results: 1,
                start: 0,
                items_per_page: 10,
            },
            entries: vec![FeedEntry {
                id: "http://arxiv.org/abs/2401.99999v1".to_string(),
                updated: "2024-01-15T10:00:00Z".to_string(),
                published: "2024-01-15T10:00:00Z".to_string(),
                title: "Mock Paper".to_string(),
                summary: "Mock abstract.".to_string(),
                authors: vec![Author {
                    name: "Mock Author".to_string(),
                }],
            }],
        }
    }
}

#[cfg(test)]
#[async_trait]
impl PaperSearchProvider for MockProvider {
    async fn search_papers(&self, _request: &SearchRequest) -> Result<SearchPage, SearchError> {
        Ok(self
            .page
            .clone()
            .unwrap_or_else(MockProvider::default_page))
    }
}
