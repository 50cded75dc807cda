//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// All of these are validation errors: they are handled locally, surfaced
/// as inline warnings, and never sent to the LLM. There is no fatal error
/// class in this core; the session stays usable after every failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Nothing to explain yet. Enter some text first.")]
    EmptyInput,

    #[error("Unknown tone: {0}")]
    UnknownTone(String),

    #[error("Age {0} is out of range (must be between 1 and 100)")]
    AgeOutOfRange(i64),
}

impl DomainError {
    /// Check if this error was caused by blank input
    pub fn is_empty_input(&self) -> bool {
        matches!(self, DomainError::EmptyInput)
    }
}
