//! Error types for paper search functionality.

use thiserror::Error;

/// Errors that can occur during paper search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Upstream API answered with a non-success HTTP status.
    #[error("API request failed with status {status}")]
    UpstreamStatus {
        /// The HTTP status code the upstream API returned
        status: u16,
    },

    /// Upstream request did not complete within the configured timeout.
    #[error("Request timed out: {reason}")]
    Timeout {
        /// The reason for the timeout
        reason: String,
    },

    /// Network communication error occurred during the request.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// Failed to parse the upstream Atom feed.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },
}

impl SearchError {
    /// Returns the upstream status code when this error carries one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::UpstreamStatus { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error represents an upstream timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_message_matches_api_contract() {
        let error = SearchError::UpstreamStatus { status: 503 };
        assert_eq!(error.to_string(), "API request failed with status 503");
        assert_eq!(error.upstream_status(), Some(503));
    }

    #[test]
    fn test_timeout_classification() {
        let timeout = SearchError::Timeout {
            reason: "deadline elapsed".to_string(),
        };
        assert!(timeout.is_timeout());
        assert!(timeout.upstream_status().is_none());

        let network = SearchError::NetworkError {
            reason: "connection refused".to_string(),
        };
        assert!(!network.is_timeout());
    }
}
