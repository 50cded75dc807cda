//! OpenAI provider configuration from TOML (`[openai]` section)

use serde::{Deserialize, Serialize};

/// OpenAI API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended; use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the OpenAI API (can be overridden for compatible endpoints).
    pub base_url: String,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
        }
    }
}

impl FileOpenAiConfig {
    /// Resolve the API key: the named environment variable wins, the
    /// direct config value is the fallback. The key is never logged.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.api_key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_key_is_fallback() {
        let config = FileOpenAiConfig {
            api_key_env: "ELI_TEST_KEY_THAT_IS_NOT_SET".to_string(),
            api_key: Some("sk-direct".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("sk-direct"));
    }

    #[test]
    fn test_no_key_resolves_to_none() {
        let config = FileOpenAiConfig {
            api_key_env: "ELI_TEST_KEY_THAT_IS_NOT_SET".to_string(),
            ..Default::default()
        };
        assert!(config.resolve_api_key().is_none());
    }
}
