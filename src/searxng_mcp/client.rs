use super::error::SearchError;
use super::format::{format_results, ResultStyle};
use super::types::*;
use super::url::build_search_url;
use super::validation::validate_query;
use crate::config::SearchConfig;
use std::sync::Arc;

pub const USER_AGENT: &str = concat!("claw-search/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct SearXNGClient {
    client: reqwest::Client,
    config: Arc<SearchConfig>,
}

impl SearXNGClient {
    pub fn new(config: Arc<SearchConfig>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs one search end to end and renders it. Failures come back as an
    /// error output rather than an `Err`.
    pub async fn execute(&self, request: SearchRequest, style: ResultStyle) -> FormattedOutput {
        match self.search(&request, style).await {
            Ok(text) => FormattedOutput::success(text),
            Err(e) => {
                log::warn!(
                    "{} search for {:?} failed: {}",
                    request.category,
                    request.query,
                    e
                );
                FormattedOutput::error(e.user_message())
            }
        }
    }

    async fn search(
        &self,
        request: &SearchRequest,
        style: ResultStyle,
    ) -> Result<String, SearchError> {
        let query = validate_query(&request.query)?;
        let count = self.config.effective_count(request.count);
        let url = build_search_url(&self.config, &query, request.category);

        let payload = self.fetch(&url).await?;
        let results = &payload.results[..payload.results.len().min(count as usize)];

        log::info!(
            "{} search for {:?}: {} of {} results",
            request.category,
            query,
            results.len(),
            payload.results.len()
        );

        Ok(format_results(results, &query, style, &payload))
    }

    /// Issues a single GET bounded by the configured timeout. When the
    /// timer fires the request future is dropped, which aborts it.
    pub async fn fetch(&self, url: &str) -> Result<SearchResponsePayload, SearchError> {
        log::debug!("GET {}", url);

        match tokio::time::timeout(self.config.timeout(), self.get_json(url)).await {
            Ok(result) => result,
            Err(_) => Err(SearchError::Timeout {
                seconds: self.config.timeout_secs,
            }),
        }
    }

    async fn get_json(&self, url: &str) -> Result<SearchResponsePayload, SearchError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::BackendError {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let json: serde_json::Value =
            serde_json::from_slice(&body).map_err(|_| SearchError::MalformedResponse)?;

        SearchResponsePayload::from_json(&json).ok_or(SearchError::MalformedResponse)
    }

    fn map_transport_error(&self, e: reqwest::Error) -> SearchError {
        if e.is_timeout() {
            SearchError::Timeout {
                seconds: self.config.timeout_secs,
            }
        } else if e.is_connect() {
            SearchError::ConnectionFailure {
                base_url: self.config.base_url.clone(),
            }
        } else {
            SearchError::Transport(e)
        }
    }
}
