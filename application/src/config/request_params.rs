//! Request parameters for the outbound LLM call.
//!
//! [`RequestParams`] groups the static parameters sent alongside each
//! prompt. These are application-layer concerns, not domain policy: the
//! session never sees them.

use eli_domain::Model;
use serde::{Deserialize, Serialize};

/// Static parameters for explanation requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestParams {
    /// Model identifier sent to the provider.
    pub model: Model,
    /// Sampling temperature.
    pub temperature: f64,
    /// Optional bound on output tokens. `None` leaves it to the provider.
    pub max_tokens: Option<u32>,
}

impl Default for RequestParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: 0.7,
            max_tokens: None,
        }
    }
}

impl RequestParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}
