//! HTTP request handlers organized by functionality

pub mod api;
pub mod pages;

// Re-export handler functions
pub use api::{SearchResponse, api_search};
pub use pages::{home_page, search_page};
