//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod audit;
mod openai;
mod request;
mod server;
mod share;

pub use audit::FileAuditConfig;
pub use openai::FileOpenAiConfig;
pub use request::FileRequestConfig;
pub use server::FileServerConfig;
pub use share::FileShareConfig;

use eli_application::RequestParams;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Web server settings
    pub server: FileServerConfig,
    /// Outbound request settings (model, temperature)
    pub request: FileRequestConfig,
    /// Share-link settings
    pub share: FileShareConfig,
    /// Audit log settings
    pub audit: FileAuditConfig,
    /// OpenAI API settings
    pub openai: FileOpenAiConfig,
}

impl FileConfig {
    /// Request parameters for the use case, straight from `[request]`
    pub fn request_params(&self) -> RequestParams {
        RequestParams::default()
            .with_model(self.request.model.clone())
            .with_temperature(self.request.temperature)
            .with_max_tokens(self.request.max_tokens)
    }
}
