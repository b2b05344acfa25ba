//! Centralized configuration for upstream search requests.

use std::time::Duration;

/// Settings for talking to the arXiv API.
///
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Query endpoint of the arXiv API
    pub endpoint: String,
    /// Upper bound on one upstream request, connect through body
    pub request_timeout: Duration,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://export.arxiv.org/api/query".to_string(),
            request_timeout: Duration::from_secs(30),
            user_agent: "folio/0.1.0",
        }
    }
}

impl SearchConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// `FOLIO_ARXIV_ENDPOINT` replaces the upstream URL and
    /// `FOLIO_ARXIV_TIMEOUT` (in seconds) replaces the request timeout.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(endpoint) = std::env::var("FOLIO_ARXIV_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                config.endpoint = endpoint.trim().to_string();
            }
        }

        if let Ok(timeout) = std::env::var("FOLIO_ARXIV_TIMEOUT") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.request_timeout = Duration::from_secs(seconds);
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = SearchConfig::default();

        assert_eq!(config.endpoint, "https://export.arxiv.org/api/query");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.user_agent, "folio/0.1.0");
    }

    #[test]
    fn test_env_override() {
        unsafe {
            std::env::set_var("FOLIO_ARXIV_ENDPOINT", "http://127.0.0.1:9999/api/query");
            std::env::set_var("FOLIO_ARXIV_TIMEOUT", "5");
        }

        let config = SearchConfig::from_env();

        assert_eq!(config.endpoint, "http://127.0.0.1:9999/api/query");
        assert_eq!(config.request_timeout, Duration::from_secs(5));

        // Cleanup
        unsafe {
            std::env::remove_var("FOLIO_ARXIV_ENDPOINT");
            std::env::remove_var("FOLIO_ARXIV_TIMEOUT");
        }
    }
}
