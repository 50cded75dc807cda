//! Share-link configuration from TOML (`[share]` section)

use serde::{Deserialize, Serialize};

/// Raw share-link configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileShareConfig {
    /// Base address share links are built against. When unset, links are
    /// derived from the incoming request's Host header.
    pub base_url: Option<String>,
}
