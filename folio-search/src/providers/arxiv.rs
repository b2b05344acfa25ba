//! ArXiv API provider for production use.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::{debug, warn};
use url::Url;

use super::PaperSearchProvider;
use crate::config::SearchConfig;
use crate::errors::SearchError;
use crate::feed;
use crate::query::SearchRequest;
use crate::types::SearchPage;

/// Paper search provider backed by the public arXiv Atom API.
///
/// Issues one GET per search with the configured timeout covering the
/// whole exchange, then parses the Atom response. No retries: a failed
/// request surfaces immediately as a typed error.
#[derive(Debug)]
pub struct ArxivProvider {
    client: reqwest::Client,
    config: SearchConfig,
}

impl ArxivProvider {
    /// Creates a provider with the given upstream configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn request_url(&self, request: &SearchRequest) -> Result<Url, SearchError> {
        let mut url = Url::parse(&self.config.endpoint).map_err(|e| SearchError::NetworkError {
            reason: format!("invalid arXiv endpoint '{}': {e}", self.config.endpoint),
        })?;

        for (key, value) in request.query_pairs() {
            url.query_pairs_mut().append_pair(key, &value);
        }
        Ok(url)
    }
}

#[async_trait]
impl PaperSearchProvider for ArxivProvider {
    async fn search_papers(&self, request: &SearchRequest) -> Result<SearchPage, SearchError> {
        let url = self.request_url(request)?;
        debug!("querying arXiv: {url}");

        let map_transport_error = |e: reqwest::Error| {
            if e.is_timeout() {
                SearchError::Timeout {
                    reason: format!("arXiv request exceeded timeout: {e}"),
                }
            } else {
                SearchError::NetworkError {
                    reason: format!("arXiv request failed: {e}"),
                }
            }
        };

        let response = self
            .client
            .get(url)
            .timeout(self.config.request_timeout)
            .header(USER_AGENT, self.config.user_agent)
            .header(
                ACCEPT,
                "application/atom+xml, application/xml;q=0.9, text/xml;q=0.8",
            )
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!("arXiv answered with status {status}");
            return Err(SearchError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(map_transport_error)?;
        feed::parse_feed(&body)
    }
}
