//! Prompt template for explanation requests

use crate::core::{age::Age, passage::Passage, tone::Tone};

/// Template for the outbound explanation instruction
///
/// Rendering is pure and deterministic: the same `(passage, age, tone)`
/// always yields the same string. The tone clause is exactly absent for
/// [`Tone::Default`].
pub struct PromptTemplate;

impl PromptTemplate {
    /// Render the explanation instruction
    pub fn explain(passage: &Passage, age: Age, tone: Tone) -> String {
        match tone {
            Tone::Default => format!(
                "Explain '{}' to someone who is {} years old.",
                passage.content(),
                age
            ),
            _ => format!(
                "Explain '{}' to someone who is {} years old. Use a {} tone.",
                passage.content(),
                age,
                tone.clause_word()
            ),
        }
    }
}
