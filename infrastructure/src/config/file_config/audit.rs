//! Audit log configuration from TOML (`[audit]` section)

use serde::{Deserialize, Serialize};

/// Raw audit log configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuditConfig {
    /// Write an append-only log of generated explanations
    pub enabled: bool,
    /// Path of the log file
    pub path: String,
}

impl Default for FileAuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "explanations.log".to_string(),
        }
    }
}
