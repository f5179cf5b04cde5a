//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::time::Duration;

/// Default Gemini model for workflow suggestions
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default Gemini REST endpoint (without the `/models/...` suffix)
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default upstream request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Gemini API key (`GEMINI_API_KEY`, falling back to `API_KEY`)
    pub api_key: Option<String>,

    /// Model name, e.g. `gemini-3-flash-preview`
    pub model: String,

    /// API base URL
    /// Example: https://generativelanguage.googleapis.com/v1beta
    pub api_base: String,

    /// Upstream request timeout
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let request_timeout = non_empty("AI_REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key: non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")),
            model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: non_empty("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            request_timeout: Duration::from_secs(request_timeout),
        }
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full `generateContent` URL for the configured model
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

// The key never shows up in logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);

        assert!(!config.has_api_key());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_all_fields() {
        let config = config_from(&[
            ("GEMINI_API_KEY", "key-123"),
            ("GEMINI_MODEL", "gemini-2.5-pro"),
            ("GEMINI_API_BASE", "http://127.0.0.1:9000/v1/"),
            ("AI_REQUEST_TIMEOUT_SECS", "5"),
        ]);

        assert_eq!(config.api_key.as_deref(), Some("key-123"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(
            config.generate_content_url(),
            "http://127.0.0.1:9000/v1/models/gemini-2.5-pro:generateContent"
        );
    }

    #[test]
    fn test_api_key_fallback() {
        let config = config_from(&[("API_KEY", "legacy")]);
        assert_eq!(config.api_key.as_deref(), Some("legacy"));

        let config = config_from(&[("API_KEY", "legacy"), ("GEMINI_API_KEY", "primary")]);
        assert_eq!(config.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config_from(&[("GEMINI_API_KEY", "  "), ("GEMINI_MODEL", "")]);

        assert!(!config.has_api_key());
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_bad_timeout_falls_back() {
        for raw in ["abc", "0", "-3"] {
            let config = config_from(&[("AI_REQUEST_TIMEOUT_SECS", raw)]);
            assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        }
    }

    #[test]
    fn test_default_url() {
        let config = config_from(&[]);
        assert_eq!(
            config.generate_content_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = config_from(&[("GEMINI_API_KEY", "super-secret")]);
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("<redacted>"));
        assert!(!debug_str.contains("super-secret"));
    }
}
