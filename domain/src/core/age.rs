//! Age value object representing the target audience age

use crate::core::error::DomainError;

/// Audience age for an explanation (Value Object)
///
/// Always within `[1, 100]`. Untrusted values (share-link parameters)
/// are clamped into range, never rejected; widget input arrives already
/// constrained by the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(u8);

impl Age {
    pub const MIN: Age = Age(1);
    pub const MAX: Age = Age(100);

    /// Create an age from a trusted in-range value
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Age(value))
        } else {
            Err(DomainError::AgeOutOfRange(i64::from(value)))
        }
    }

    /// Clamp an arbitrary integer into `[1, 100]`
    ///
    /// This is the entry point for share-link values: `-5` becomes 1,
    /// `500` becomes 100.
    pub fn clamped(value: i64) -> Self {
        Age(value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0)) as u8)
    }

    /// Parse a decimal string and clamp it, returning `None` when the
    /// string is not an integer at all
    pub fn parse_clamped(s: &str) -> Option<Self> {
        s.trim().parse::<i64>().ok().map(Self::clamped)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Age {
    /// The slider's starting position: 5 years old
    fn default() -> Self {
        Age(5)
    }
}

impl std::fmt::Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_five() {
        assert_eq!(Age::default().get(), 5);
    }

    #[test]
    fn test_clamped_in_range() {
        assert_eq!(Age::clamped(42).get(), 42);
        assert_eq!(Age::clamped(1).get(), 1);
        assert_eq!(Age::clamped(100).get(), 100);
    }

    #[test]
    fn test_clamped_out_of_range() {
        assert_eq!(Age::clamped(-5).get(), 1);
        assert_eq!(Age::clamped(0).get(), 1);
        assert_eq!(Age::clamped(500).get(), 100);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Age::new(0).is_err());
        assert!(Age::new(101).is_err());
        assert_eq!(Age::new(30).unwrap().get(), 30);
    }

    #[test]
    fn test_parse_clamped() {
        assert_eq!(Age::parse_clamped("7"), Some(Age(7)));
        assert_eq!(Age::parse_clamped(" 500 "), Some(Age(100)));
        assert_eq!(Age::parse_clamped("-5"), Some(Age(1)));
        assert_eq!(Age::parse_clamped("five"), None);
        assert_eq!(Age::parse_clamped(""), None);
    }
}
