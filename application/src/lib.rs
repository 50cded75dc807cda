//! Application layer for eli
//!
//! This crate contains the explanation use case, port definitions, and
//! request parameters. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RequestParams;
pub use ports::{
    audit_sink::{AuditRecord, AuditSink, NoAuditSink},
    llm_gateway::{ExplainRequest, GatewayError, LlmGateway},
};
pub use use_cases::run_explain::{RunExplainError, RunExplainUseCase};
