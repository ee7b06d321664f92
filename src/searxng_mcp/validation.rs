use super::error::SearchError;

pub const MAX_QUERY_LENGTH: usize = 500;

/// Trims the query and rejects empty or oversized input. Escaping is left
/// to the URL builder.
pub fn validate_query(raw: &str) -> Result<String, SearchError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(SearchError::InvalidQuery);
    }

    if trimmed.chars().count() > MAX_QUERY_LENGTH {
        return Err(SearchError::QueryTooLong {
            max: MAX_QUERY_LENGTH,
        });
    }

    Ok(trimmed.to_string())
}
