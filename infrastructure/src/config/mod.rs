//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{
    FileAuditConfig, FileConfig, FileOpenAiConfig, FileRequestConfig, FileServerConfig,
    FileShareConfig,
};
pub use loader::ConfigLoader;
