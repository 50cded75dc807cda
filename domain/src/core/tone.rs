//! Tone value object representing the explanation style

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Stylistic modifier applied to a generated explanation (Value Object)
///
/// `Default` means "no tone clause at all": the prompt carries no mention
/// of tone in that case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Default,
    Funny,
    Sarcastic,
    Poetic,
}

impl Tone {
    /// All tones, in the order they appear in the selector widget
    pub const ALL: [Tone; 4] = [Tone::Default, Tone::Funny, Tone::Sarcastic, Tone::Poetic];

    /// Canonical name, as carried in share links and shown in widgets
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Default => "Default",
            Tone::Funny => "Funny",
            Tone::Sarcastic => "Sarcastic",
            Tone::Poetic => "Poetic",
        }
    }

    /// Lowercased form used in the prompt's tone clause
    pub fn clause_word(&self) -> &'static str {
        match self {
            Tone::Default => "",
            Tone::Funny => "funny",
            Tone::Sarcastic => "sarcastic",
            Tone::Poetic => "poetic",
        }
    }

    /// Parse a tone name, silently falling back to `Default` for anything
    /// unrecognized. Share-link parameters go through here.
    pub fn parse_lenient(s: &str) -> Tone {
        s.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Tone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Tone::Default),
            "funny" => Ok(Tone::Funny),
            "sarcastic" => Ok(Tone::Sarcastic),
            "poetic" => Ok(Tone::Poetic),
            _ => Err(DomainError::UnknownTone(s.trim().to_string())),
        }
    }
}
