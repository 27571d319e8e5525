use std::env;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Settings for the AI insight client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Without a key the client answers with a fixed notice instead of calling out.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl InsightConfig {
    /// Read `GEMINI_API_KEY` (or `API_KEY`), `GEMINI_MODEL` and
    /// `GEMINI_ENDPOINT`, loading a `.env` file first if one exists.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();
        Self {
            api_key: non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")),
            model: non_empty("GEMINI_MODEL").unwrap_or(defaults.model),
            endpoint: non_empty("GEMINI_ENDPOINT")
                .map(|e| e.trim_end_matches('/').to_string())
                .unwrap_or(defaults.endpoint),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub(crate) fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup<'a>(vars: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_defaults_without_env() {
        let config = InsightConfig::from_lookup(|_| None);
        assert_eq!(config, InsightConfig::default());
        assert_eq!(
            config.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_key_fallback_and_overrides() {
        let vars = HashMap::from([
            ("API_KEY", "legacy"),
            ("GEMINI_MODEL", "gemini-pro"),
            ("GEMINI_ENDPOINT", "http://localhost:9000/"),
        ]);
        let config = InsightConfig::from_lookup(lookup(&vars));
        assert_eq!(config.api_key.as_deref(), Some("legacy"));
        assert_eq!(
            config.generate_url(),
            "http://localhost:9000/models/gemini-pro:generateContent"
        );

        let vars = HashMap::from([("GEMINI_API_KEY", "primary"), ("API_KEY", "legacy")]);
        let config = InsightConfig::from_lookup(lookup(&vars));
        assert_eq!(config.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let vars = HashMap::from([("GEMINI_API_KEY", "  ")]);
        assert_eq!(InsightConfig::from_lookup(lookup(&vars)).api_key, None);
    }
}
