//! OpenAI chat-completions adapter for the [`LlmGateway`] port.
//!
//! One prompt in, one message out. The adapter performs no retries; a
//! failed call is reported as a [`GatewayError`] and the caller decides
//! what to show. The API key is sent as a bearer header and never logged.

use async_trait::async_trait;
use eli_application::ports::llm_gateway::{ExplainRequest, GatewayError, LlmGateway};
use eli_domain::util::preview;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Request timeout. The session blocks on the call, so a hung endpoint
/// must eventually surface as a failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub struct OpenAiGateway {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiGateway {
    /// Create a gateway against the default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, "https://api.openai.com")
    }

    /// Create a gateway with a custom base URL (compatible endpoints).
    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    /// Pull the explanation text out of a parsed response body.
    fn extract_text(body: ChatResponse) -> Result<String, GatewayError> {
        let text = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();
        if text.is_empty() {
            Err(GatewayError::MalformedResponse(
                "response contained no message content".to_string(),
            ))
        } else {
            Ok(text)
        }
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn explain(&self, request: &ExplainRequest) -> Result<String, GatewayError> {
        let payload = ChatRequest {
            model: request.model.as_str(),
            messages: vec![Message {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(model = %request.model, "POST {}", self.endpoint());

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = format!("{}: {}", status, preview(&body, 200));
            return Err(match status.as_u16() {
                401 | 403 => GatewayError::AuthFailed(detail),
                429 => GatewayError::RateLimited(detail),
                _ => GatewayError::RequestFailed(detail),
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
        Self::extract_text(body)
    }
}
