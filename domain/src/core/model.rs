//! Model value object representing an LLM model identifier

use serde::{Deserialize, Serialize};

/// LLM model identifier (Value Object)
///
/// The model is chosen by configuration, not by the session; this core
/// treats the LLM as an opaque collaborator, so any identifier the
/// configured endpoint accepts is valid here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model(String);

impl Model {
    pub fn new(id: impl Into<String>) -> Self {
        Model(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Model {
    fn default() -> Self {
        Model("gpt-4o-mini".to_string())
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Model(s.to_string()))
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        Model::new(s)
    }
}
