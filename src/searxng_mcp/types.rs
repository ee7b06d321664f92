use rmcp::model::{CallToolResult, Content};
use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// SearXNG result category a tool is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    General,
    News,
    Images,
    Videos,
    It,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::News => "news",
            Category::Images => "images",
            Category::Videos => "videos",
            Category::It => "it",
        }
    }

    /// SearXNG only honours `safesearch` for web and news results.
    pub fn supports_safesearch(&self) -> bool {
        matches!(self, Category::General | Category::News)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments accepted by every search tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchToolRequest {
    #[schemars(description = "Search query (max 500 characters)")]
    pub query: String,
    #[schemars(description = "Number of results (1-100, default 10)", range(min = 1, max = 100))]
    pub count: Option<i64>,
}

/// A single invocation of the search pipeline.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub count: Option<i64>,
    pub category: Category,
}

impl SearchRequest {
    pub fn new(request: SearchToolRequest, category: Category) -> Self {
        Self {
            query: request.query,
            count: request.count,
            category,
        }
    }
}

/// One entry of the backend's `results` array. SearXNG engines fill in
/// different subsets of these, so nothing is guaranteed to be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResultItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: Option<String>,
    #[serde(rename = "publishedDate", default, deserialize_with = "lenient_string")]
    pub published_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub img_src: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub thumbnail_src: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub thumbnail: Option<String>,
}

/// Strings pass through and numbers are stringified; any other JSON type
/// counts as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// The parts of a SearXNG JSON response the formatter uses.
///
/// `results` is kept as raw JSON so a single unreadable entry can be
/// skipped without rejecting the whole response.
#[derive(Debug, Clone, Default)]
pub struct SearchResponsePayload {
    pub results: Vec<serde_json::Value>,
    pub answers: Option<Vec<serde_json::Value>>,
    pub suggestions: Option<Vec<String>>,
}

impl SearchResponsePayload {
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let object = value.as_object()?;

        let results = object
            .get("results")
            .and_then(|r| r.as_array())
            .cloned()
            .unwrap_or_default();

        let answers = object
            .get("answers")
            .and_then(|a| a.as_array())
            .cloned();

        let suggestions = object
            .get("suggestions")
            .and_then(|s| s.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(|s| s.to_string()))
                    .collect()
            });

        Some(Self {
            results,
            answers,
            suggestions,
        })
    }
}

/// Text handed back to the host, flagged when it describes a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedOutput {
    pub text: String,
    pub is_error: bool,
}

impl FormattedOutput {
    pub fn success(text: String) -> Self {
        Self {
            text,
            is_error: false,
        }
    }

    pub fn error(text: String) -> Self {
        Self {
            text,
            is_error: true,
        }
    }
}

impl From<FormattedOutput> for CallToolResult {
    fn from(output: FormattedOutput) -> Self {
        if output.is_error {
            CallToolResult::error(vec![Content::text(output.text)])
        } else {
            CallToolResult::success(vec![Content::text(output.text)])
        }
    }
}
