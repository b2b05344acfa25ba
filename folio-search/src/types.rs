//! Data types for paper search results.
//!
//! The JSON shapes here mirror what the search API hands to clients:
//! entries are always lists, author lists are always lists of
//! `{"name": ...}` objects, and metadata counters are plain numbers
//! even when the upstream feed omitted them.

use serde::{Deserialize, Serialize};

/// Single author of a paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name as given by the feed
    pub name: String,
}

/// One paper record from the arXiv Atom feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Abstract page URL, doubling as the entry identity
    pub id: String,
    /// Last revision timestamp (RFC 3339)
    pub updated: String,
    /// First submission timestamp (RFC 3339)
    pub published: String,
    /// Paper title with whitespace collapsed
    pub title: String,
    /// Abstract text with whitespace collapsed
    pub summary: String,
    /// Authors in feed order
    #[serde(rename = "author")]
    pub authors: Vec<Author>,
}

impl FeedEntry {
    /// Extracts the bare arXiv identifier from the entry's abstract URL.
    ///
    /// Returns `None` when the URL carries no `/abs/` segment, which
    /// only happens for malformed feeds.
    pub fn arxiv_id(&self) -> Option<&str> {
        let i = self.id.rfind("/abs/")?;
        let id = self.id[i + "/abs/".len()..].trim_matches('/');
        (!id.is_empty()).then_some(id)
    }
}

/// Feed-level identity and pagination metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMetadata {
    /// Feed title, e.g. `ArXiv Query: search_query=...`
    pub title: String,
    /// Feed identity URL
    pub id: String,
    /// Feed generation timestamp
    pub updated: String,
    /// Total matches reported by the upstream API
    #[serde(rename = "totalResults")]
    pub total_results: u64,
    /// Zero-based offset of the first returned entry
    pub start: u64,
    /// Page size the upstream applied
    #[serde(rename = "itemsPerPage")]
    pub items_per_page: u64,
}

/// One parsed and normalized page of search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Feed envelope metadata
    pub metadata: SearchMetadata,
    /// Entries in feed order, empty when nothing matched
    pub entries: Vec<FeedEntry>,
}

impl SearchPage {
    /// Creates an empty page that echoes the requested pagination window.
    pub fn empty(start: u64, items_per_page: u64) -> Self {
        Self {
            metadata: SearchMetadata {
                start,
                items_per_page,
                ..SearchMetadata::default()
            },
            entries: Vec::new(),
        }
    }
}
