use super::types::Category;
use crate::config::SearchConfig;

/// Builds the SearXNG `/search` URL for a validated query.
///
/// Parameter order is fixed: `q`, `format`, `language`, then `categories`
/// (omitted for general search, which is the backend default) and
/// `safesearch` (only for general and news).
pub fn build_search_url(config: &SearchConfig, query: &str, category: Category) -> String {
    let base_url = config
        .base_url
        .strip_suffix('/')
        .unwrap_or(&config.base_url);

    let mut url = format!(
        "{}/search?q={}&format=json&language={}",
        base_url,
        urlencoding::encode(query),
        config.language
    );

    if category != Category::General {
        url.push_str(&format!("&categories={}", category));
    }

    if category.supports_safesearch() {
        url.push_str(&format!("&safesearch={}", config.safesearch));
    }

    url
}
