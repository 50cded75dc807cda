//! Session request lifecycle

/// Where a session stands in the request lifecycle
///
/// `Idle → Pending → Displaying` on success; `Pending → IdleWithError` on
/// failure. Both `Displaying` and `IdleWithError` are re-enterable via a
/// new submit; there is no terminal state. Validation failures do not
/// move the phase at all; the session is left exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing in flight, nothing to show yet
    #[default]
    Idle,
    /// A request has been issued and the session is blocked on it
    Pending,
    /// The most recent request succeeded and its output is on display
    Displaying,
    /// The most recent request failed; the message is shown to the user
    IdleWithError(String),
}

impl SessionPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, SessionPhase::Pending)
    }

    /// The failure message, when the last request failed
    pub fn error(&self) -> Option<&str> {
        match self {
            SessionPhase::IdleWithError(reason) => Some(reason),
            _ => None,
        }
    }
}
