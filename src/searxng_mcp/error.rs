use thiserror::Error;

/// Failures of a single search invocation. None of these escape a tool
/// call; the executor renders them into an error result.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search query cannot be empty")]
    InvalidQuery,
    #[error("Search query too long (max {max} characters)")]
    QueryTooLong { max: usize },
    #[error("Request timeout after {seconds} seconds")]
    Timeout { seconds: f64 },
    #[error("Cannot connect to SearXNG at {base_url}. Make sure SearXNG is running.")]
    ConnectionFailure { base_url: String },
    #[error("SearXNG returned {status}: {status_text}")]
    BackendError { status: u16, status_text: String },
    #[error("Invalid response format from SearXNG")]
    MalformedResponse,
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl SearchError {
    /// Text shown to the host for a failed search.
    pub fn user_message(&self) -> String {
        format!("Search failed: {}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            SearchError::Timeout { seconds: 15.0 }.user_message(),
            "Search failed: Request timeout after 15 seconds"
        );
        assert_eq!(
            SearchError::Timeout { seconds: 0.5 }.user_message(),
            "Search failed: Request timeout after 0.5 seconds"
        );
        assert_eq!(
            SearchError::ConnectionFailure {
                base_url: "http://localhost:8888".to_string()
            }
            .user_message(),
            "Search failed: Cannot connect to SearXNG at http://localhost:8888. Make sure SearXNG is running."
        );
        assert_eq!(
            SearchError::BackendError {
                status: 502,
                status_text: "Bad Gateway".to_string()
            }
            .user_message(),
            "Search failed: SearXNG returned 502: Bad Gateway"
        );
        assert_eq!(
            SearchError::QueryTooLong { max: 500 }.to_string(),
            "Search query too long (max 500 characters)"
        );
    }
}
