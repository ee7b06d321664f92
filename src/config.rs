use serde::Deserialize;
use std::error::Error;
use std::path::Path;
use std::time::Duration;

pub const PLUGIN_ID: &str = "claw-search";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8888";
pub const DEFAULT_MAX_RESULTS: u32 = 10;
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TIMEOUT_SECS: f64 = 15.0;
pub const MIN_RESULTS: i64 = 1;
pub const MAX_RESULTS: i64 = 100;

/// Raw plugin settings as they appear in the host configuration. Every key
/// is optional; `SearchConfig::from_plugin_config` fills in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    pub base_url: Option<String>,
    pub max_results: Option<i64>,
    pub language: Option<String>,
    pub safesearch: Option<i64>,
    pub timeout: Option<f64>,
}

impl PluginConfig {
    /// Extracts the plugin block from a host config tree. A document that
    /// is already just the plugin block is accepted as well.
    pub fn from_host_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        let block = value
            .pointer(&format!("/plugins/entries/{}/config", PLUGIN_ID))
            .unwrap_or(value);
        serde_json::from_value(block.clone())
    }

    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        let value: serde_json::Value = serde_json::from_str(&contents)
            .map_err(|e| format!("Invalid JSON in config {}: {}", path.display(), e))?;
        Ok(Self::from_host_value(&value)?)
    }

    /// Values set in `overrides` win over the ones already present.
    pub fn merge(self, overrides: PluginConfig) -> Self {
        Self {
            base_url: overrides.base_url.or(self.base_url),
            max_results: overrides.max_results.or(self.max_results),
            language: overrides.language.or(self.language),
            safesearch: overrides.safesearch.or(self.safesearch),
            timeout: overrides.timeout.or(self.timeout),
        }
    }
}

/// Process-wide search settings, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub base_url: String,
    pub max_results: u32,
    pub language: String,
    pub safesearch: u8,
    pub timeout_secs: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            language: DEFAULT_LANGUAGE.to_string(),
            safesearch: 0,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SearchConfig {
    pub fn from_plugin_config(plugin: PluginConfig) -> Self {
        let base_url = plugin
            .base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let language = plugin
            .language
            .filter(|lang| !lang.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let max_results = clamp_count(plugin.max_results.unwrap_or(DEFAULT_MAX_RESULTS as i64));
        let safesearch = plugin.safesearch.unwrap_or(0).clamp(0, 2) as u8;

        let timeout_secs = plugin
            .timeout
            .filter(|t| *t > 0.0 && Duration::try_from_secs_f64(*t).is_ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            max_results,
            language,
            safesearch,
            timeout_secs,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_secs)
            .unwrap_or_else(|_| Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS))
    }

    /// Number of results to return for a request. An explicit count is
    /// clamped, never replaced by the default.
    pub fn effective_count(&self, requested: Option<i64>) -> u32 {
        clamp_count(requested.unwrap_or(self.max_results as i64))
    }
}

fn clamp_count(count: i64) -> u32 {
    count.clamp(MIN_RESULTS, MAX_RESULTS) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::from_plugin_config(PluginConfig::default());
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_values_are_normalised() {
        let config = SearchConfig::from_plugin_config(PluginConfig {
            base_url: Some("  ".to_string()),
            max_results: Some(500),
            language: Some(String::new()),
            safesearch: Some(7),
            timeout: Some(-3.0),
        });

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_results, 100);
        assert_eq!(config.language, DEFAULT_LANGUAGE);
        assert_eq!(config.safesearch, 2);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        let config = SearchConfig::from_plugin_config(PluginConfig {
            max_results: Some(0),
            safesearch: Some(-1),
            timeout: Some(f64::NAN),
            ..Default::default()
        });
        assert_eq!(config.max_results, 1);
        assert_eq!(config.safesearch, 0);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        for timeout in [1e20, f64::INFINITY, f64::MAX] {
            let config = SearchConfig::from_plugin_config(PluginConfig {
                timeout: Some(timeout),
                ..Default::default()
            });
            assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
            assert_eq!(config.timeout(), Duration::from_secs(15));
        }
    }

    #[test]
    fn test_timeout_never_panics_on_unrepresentable_values() {
        let config = SearchConfig {
            timeout_secs: 1e20,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_effective_count() {
        let config = SearchConfig::default();
        assert_eq!(config.effective_count(None), 10);
        assert_eq!(config.effective_count(Some(0)), 1);
        assert_eq!(config.effective_count(Some(-4)), 1);
        assert_eq!(config.effective_count(Some(101)), 100);
        assert_eq!(config.effective_count(Some(37)), 37);

        let config = SearchConfig {
            max_results: 25,
            ..Default::default()
        };
        assert_eq!(config.effective_count(None), 25);
    }

    #[test]
    fn test_reads_plugin_block_from_host_tree() {
        let host = json!({
            "plugins": {
                "entries": {
                    "claw-search": {
                        "config": {
                            "baseUrl": "http://searx.lan:8080/",
                            "maxResults": 20,
                            "safesearch": 1,
                            "timeout": 5
                        }
                    },
                    "other-plugin": { "config": { "baseUrl": "http://nope" } }
                }
            }
        });

        let plugin = PluginConfig::from_host_value(&host).unwrap();
        assert_eq!(plugin.base_url.as_deref(), Some("http://searx.lan:8080/"));
        assert_eq!(plugin.max_results, Some(20));
        assert_eq!(plugin.safesearch, Some(1));
        assert_eq!(plugin.timeout, Some(5.0));
        assert!(plugin.language.is_none());
    }

    #[test]
    fn test_reads_bare_plugin_block() {
        let plugin = PluginConfig::from_host_value(&json!({ "language": "de" })).unwrap();
        assert_eq!(plugin.language.as_deref(), Some("de"));
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let file = PluginConfig {
            base_url: Some("http://file".to_string()),
            language: Some("fr".to_string()),
            ..Default::default()
        };
        let cli = PluginConfig {
            base_url: Some("http://cli".to_string()),
            ..Default::default()
        };

        let merged = file.merge(cli);
        assert_eq!(merged.base_url.as_deref(), Some("http://cli"));
        assert_eq!(merged.language.as_deref(), Some("fr"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"plugins":{{"entries":{{"claw-search":{{"config":{{"language":"nl"}}}}}}}}}}"#
        )
        .unwrap();

        let plugin = PluginConfig::from_file(file.path()).unwrap();
        assert_eq!(plugin.language.as_deref(), Some("nl"));

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        write!(broken, "not json").unwrap();
        assert!(PluginConfig::from_file(broken.path()).is_err());
    }
}
