//! Web server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Raw server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address the web server binds to
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}
