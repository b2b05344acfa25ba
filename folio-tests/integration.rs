//! Integration tests for Folio
//!
//! These tests verify the integration between components: the JSON
//! contract of the search API and the arXiv client running against a
//! stub upstream endpoint.

#[path = "integration/api_contract.rs"]
mod api_contract;

#[path = "integration/arxiv_client.rs"]
mod arxiv_client;
