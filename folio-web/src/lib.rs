//! Folio Web - Search UI and JSON API server

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Serves the server-rendered paper search interface and the JSON search
//! endpoint that proxies the arXiv API for frontend and external clients.

pub mod components;
pub mod config;
pub mod handlers;
pub mod server;

// Re-export main types
pub use config::WebServerConfig;
pub use server::{AppState, router, run_server};
