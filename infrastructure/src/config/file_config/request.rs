//! Outbound request configuration from TOML (`[request]` section)

use eli_domain::Model;
use serde::{Deserialize, Serialize};

/// Raw request configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRequestConfig {
    /// Model identifier (uses domain type)
    pub model: Model,
    /// Sampling temperature
    pub temperature: f64,
    /// Optional bound on output tokens
    pub max_tokens: Option<u32>,
}

impl Default for FileRequestConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: 0.7,
            max_tokens: None,
        }
    }
}
