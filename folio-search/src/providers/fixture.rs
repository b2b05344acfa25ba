//! Fixture provider implementation for development and testing.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};

use super::PaperSearchProvider;
use crate::errors::SearchError;
use crate::query::{SearchRequest, SortOrder};
use crate::types::{Author, FeedEntry, SearchMetadata, SearchPage};

/// Newest fixture entry timestamp, 2024-01-15T10:00:00Z. Each following
/// entry is one day older.
const FIXTURE_EPOCH: i64 = 1_705_312_800;

const AUTHOR_POOL: [&str; 5] = [
    "Ada Lovelace",
    "Alan Turing",
    "Grace Hopper",
    "Emmy Noether",
    "Claude Shannon",
];

/// Fixture provider serving a deterministic synthetic corpus.
///
/// Answers every query with the same stable set of papers so the UI can
/// be developed and demonstrated offline. Pagination and sort order are
/// honored the way the real API honors them; content depends only on
/// the query string and entry index.
#[derive(Debug, Clone)]
pub struct FixtureProvider {
    total_results: u64,
}

impl Default for FixtureProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureProvider {
    /// Creates a provider with the standard 37-entry corpus.
    pub fn new() -> Self {
        Self { total_results: 37 }
    }

    /// Creates a provider with a corpus of the given size.
    pub fn with_total(total_results: u64) -> Self {
        Self { total_results }
    }

    fn entry(&self, query: &str, index: u64) -> FeedEntry {
        let timestamp = entry_timestamp(index);
        let author_count = 1 + (index % 3) as usize;
        let authors = (0..author_count)
            .map(|offset| Author {
                name: AUTHOR_POOL[(index as usize + offset) % AUTHOR_POOL.len()].to_string(),
            })
            .collect();

        FeedEntry {
            id: format!("http://arxiv.org/abs/2401.{:05}v1", index + 1),
            updated: timestamp.clone(),
            published: timestamp,
            title: format!("A Study of {query}, Part {}", index + 1),
            summary: format!(
                "Fixture abstract {} for the query '{query}'. The corpus is generated \
                 deterministically so paging and ordering stay stable across runs.",
                index + 1
            ),
            authors,
        }
    }
}

fn entry_timestamp(index: u64) -> String {
    let secs = FIXTURE_EPOCH - index as i64 * 86_400;
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default()
}

#[async_trait]
impl PaperSearchProvider for FixtureProvider {
    async fn search_papers(&self, request: &SearchRequest) -> Result<SearchPage, SearchError> {
        // Corpus index 0 is the newest entry, so newest-first and
        // relevance both walk forward; oldest-first walks backward.
        let order: Vec<u64> = match request.sort {
            SortOrder::OldestFirst => (0..self.total_results).rev().collect(),
            SortOrder::NewestFirst | SortOrder::Relevance => (0..self.total_results).collect(),
        };

        let entries: Vec<FeedEntry> = order
            .into_iter()
            .skip(request.start as usize)
            .take(request.max_results as usize)
            .map(|index| self.entry(&request.query, index))
            .collect();

        Ok(SearchPage {
            metadata: SearchMetadata {
                title: format!(
                    "ArXiv Query: search_query={}",
                    request.search_expression()
                ),
                id: "http://arxiv.org/api/fixture".to_string(),
                updated: entry_timestamp(0),
                total_results: self.total_results,
                start: request.start,
                items_per_page: request.max_results,
            },
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_page_has_requested_size() {
        let provider = FixtureProvider::new();
        let request = SearchRequest::new("spin glasses");

        let page = provider.search_papers(&request).await.unwrap();

        assert_eq!(page.entries.len(), 10);
        assert_eq!(page.metadata.total_results, 37);
        assert_eq!(page.metadata.start, 0);
        assert_eq!(page.metadata.items_per_page, 10);
    }

    #[tokio::test]
    async fn test_paging_continues_where_first_page_ended() {
        let provider = FixtureProvider::new();
        let first = SearchRequest::new("spin glasses");
        let second = SearchRequest {
            start: 10,
            ..SearchRequest::new("spin glasses")
        };

        let page_one = provider.search_papers(&first).await.unwrap();
        let page_two = provider.search_papers(&second).await.unwrap();

        assert_ne!(page_one.entries[0].id, page_two.entries[0].id);
        assert_eq!(page_two.entries[0].id, "http://arxiv.org/abs/2401.00011v1");
    }

    #[tokio::test]
    async fn test_last_page_is_partial() {
        let provider = FixtureProvider::new();
        let request = SearchRequest {
            start: 30,
            ..SearchRequest::new("spin glasses")
        };

        let page = provider.search_papers(&request).await.unwrap();
        assert_eq!(page.entries.len(), 7);
    }

    #[tokio::test]
    async fn test_oldest_first_reverses_order() {
        let provider = FixtureProvider::new();
        let newest = SearchRequest {
            sort: SortOrder::NewestFirst,
            ..SearchRequest::new("q")
        };
        let oldest = SearchRequest {
            sort: SortOrder::OldestFirst,
            ..SearchRequest::new("q")
        };

        let newest_page = provider.search_papers(&newest).await.unwrap();
        let oldest_page = provider.search_papers(&oldest).await.unwrap();

        assert_eq!(newest_page.entries[0].id, "http://arxiv.org/abs/2401.00001v1");
        assert_eq!(oldest_page.entries[0].id, "http://arxiv.org/abs/2401.00037v1");
        assert!(newest_page.entries[0].published > oldest_page.entries[0].published);
    }

    #[tokio::test]
    async fn test_entries_carry_rfc3339_timestamps_and_authors() {
        let provider = FixtureProvider::new();
        let page = provider
            .search_papers(&SearchRequest::new("q"))
            .await
            .unwrap();

        let entry = &page.entries[0];
        assert_eq!(entry.published, "2024-01-15T10:00:00Z");
        assert_eq!(entry.authors.len(), 1);

        // Author counts cycle 1, 2, 3 by index.
        assert_eq!(page.entries[2].authors.len(), 3);
    }
}
