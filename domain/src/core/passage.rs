//! Passage value object

use crate::core::error::DomainError;

/// A passage of text to be explained (Value Object)
///
/// Guaranteed non-blank: constructing one is the validation gate, so blank
/// input can never reach prompt construction or the LLM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    content: String,
}

impl Passage {
    /// Validate and wrap input text
    ///
    /// Returns [`DomainError::EmptyInput`] for empty or whitespace-only
    /// input. The content is kept as supplied (no trimming) so the prompt
    /// and history reflect exactly what the user typed.
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::EmptyInput)
        } else {
            Ok(Self { content })
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Passage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
