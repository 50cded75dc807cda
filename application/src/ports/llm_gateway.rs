//! LLM Gateway port
//!
//! Defines the interface for the single outbound explanation call. The LLM
//! is an opaque external collaborator: one request, one response or one
//! failure. No retries, no streaming, no cancellation; any timeout is the
//! HTTP client's business, not this core's.

use async_trait::async_trait;
use eli_domain::Model;
use thiserror::Error;

/// Errors that can occur during an explanation request
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// One outbound explanation request
#[derive(Debug, Clone)]
pub struct ExplainRequest {
    pub model: Model,
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: Option<u32>,
}

/// Gateway for LLM communication
///
/// This port defines how the application layer reaches the LLM provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send one prompt and wait for the full explanation text
    async fn explain(&self, request: &ExplainRequest) -> Result<String, GatewayError>;
}
