//! Folio Search - ArXiv paper search and feed parsing

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Provides arXiv query construction, upstream fetching with a hard
//! timeout, and Atom feed normalization behind a provider abstraction
//! so the same search surface runs against the real API, fixture data,
//! or mocks.

pub mod config;
pub mod errors;
pub mod feed;
pub mod mode;
pub mod providers;
pub mod query;
pub mod service;
pub mod types;

// Re-export main types
pub use config::SearchConfig;
pub use errors::SearchError;
pub use mode::RuntimeMode;
pub use providers::{ArxivProvider, FixtureProvider, PaperSearchProvider};
pub use query::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, SearchRequest, SortOrder};
pub use service::PaperSearchService;
pub use types::{Author, FeedEntry, SearchMetadata, SearchPage};

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
