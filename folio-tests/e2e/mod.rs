//! End-to-end tests for Folio
//!
//! These tests verify complete user workflows from start to finish:
//! the web server, search service and demo provider running together
//! the way a browser session would exercise them.

mod search_workflow;
