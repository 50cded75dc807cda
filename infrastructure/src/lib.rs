//! Infrastructure layer for eli
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAuditConfig, FileConfig, FileOpenAiConfig, FileRequestConfig,
    FileServerConfig, FileShareConfig,
};
pub use logging::FileAuditSink;
pub use providers::OpenAiGateway;
