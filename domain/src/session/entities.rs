//! Session domain entities

use crate::core::{age::Age, error::DomainError, passage::Passage, tone::Tone};
use crate::session::phase::SessionPhase;
use crate::session::share::SessionSeed;

/// Maximum number of past results kept per session
pub const HISTORY_CAP: usize = 3;

/// Immutable snapshot of one successful explanation request
///
/// Created atomically when a request succeeds; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub input_text: String,
    pub age: Age,
    pub tone: Tone,
    pub output: String,
}

/// The interaction state for one user's browsing session (Entity)
///
/// A session holds the current input text, age, and tone, the most recent
/// output, and a bounded most-recent-first history of past results. All
/// state transitions go through explicit methods; there is no ambient
/// store; the hosting layer owns one `Session` per connected client.
#[derive(Debug, Clone, Default)]
pub struct Session {
    input_text: String,
    age: Age,
    tone: Tone,
    last_output: Option<String>,
    history: Vec<HistoryEntry>,
    generated: usize,
    phase: SessionPhase,
}

impl Session {
    /// Start a session from defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a session from share-link query parameters
    ///
    /// Happens exactly once, when the session is created: the age string is
    /// parsed and clamped to `[1, 100]` (invalid or missing falls back to
    /// the default), unknown tones silently fall back to `Default`, and a
    /// missing text parameter leaves the input empty. Output and history
    /// are never reconstructed from a link. After this, in-session edits
    /// take precedence; query parameters are never re-read.
    pub fn initialize(seed: &SessionSeed) -> Self {
        Self {
            input_text: seed.text.clone().unwrap_or_default(),
            age: seed
                .age
                .as_deref()
                .and_then(Age::parse_clamped)
                .unwrap_or_default(),
            tone: seed
                .tone
                .as_deref()
                .map(Tone::parse_lenient)
                .unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn last_output(&self) -> Option<&str> {
        self.last_output.as_deref()
    }

    /// Past results, most recent first, never more than [`HISTORY_CAP`]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Total number of explanations generated in this session
    pub fn generated(&self) -> usize {
        self.generated
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    // ==================== Widget edits ====================

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn set_age(&mut self, age: Age) {
        self.age = age;
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    /// Overwrite the input with a preset example string
    ///
    /// Clears the last output so stale output is never shown against new
    /// input. Age and tone are left untouched.
    pub fn apply_preset(&mut self, preset_text: impl Into<String>) {
        self.input_text = preset_text.into();
        self.last_output = None;
        self.phase = SessionPhase::Idle;
    }

    // ==================== Request lifecycle ====================

    /// Validate the current input and move to `Pending`
    ///
    /// Returns the validated [`Passage`] to build the prompt from. On
    /// validation failure the session is left exactly as it was; blank
    /// input never reaches prompt construction.
    pub fn begin_request(&mut self) -> Result<Passage, DomainError> {
        let passage = Passage::try_new(self.input_text.clone())?;
        self.phase = SessionPhase::Pending;
        Ok(passage)
    }

    /// Record a successful explanation
    ///
    /// Sets the last output, prepends a history snapshot, and truncates the
    /// history to [`HISTORY_CAP`] entries (oldest evicted first). The whole
    /// update is a single call so no partial state is ever visible.
    pub fn record_result(&mut self, output: impl Into<String>) {
        let output = output.into();
        self.history.insert(
            0,
            HistoryEntry {
                input_text: self.input_text.clone(),
                age: self.age,
                tone: self.tone,
                output: output.clone(),
            },
        );
        self.history.truncate(HISTORY_CAP);
        self.last_output = Some(output);
        self.generated += 1;
        self.phase = SessionPhase::Displaying;
    }

    /// Record a failed request
    ///
    /// Only the phase changes; output and history are left untouched from
    /// before the attempt, and the session stays usable for another try.
    pub fn fail_request(&mut self, reason: impl Into<String>) {
        self.phase = SessionPhase::IdleWithError(reason.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(text: Option<&str>, age: Option<&str>, tone: Option<&str>) -> SessionSeed {
        SessionSeed {
            text: text.map(String::from),
            age: age.map(String::from),
            tone: tone.map(String::from),
        }
    }

    #[test]
    fn test_defaults() {
        let session = Session::new();
        assert_eq!(session.input_text(), "");
        assert_eq!(session.age().get(), 5);
        assert_eq!(session.tone(), Tone::Default);
        assert!(session.last_output().is_none());
        assert!(session.history().is_empty());
        assert_eq!(*session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_initialize_from_full_seed() {
        let session = Session::initialize(&seed(Some("What is ROI?"), Some("30"), Some("Funny")));
        assert_eq!(session.input_text(), "What is ROI?");
        assert_eq!(session.age().get(), 30);
        assert_eq!(session.tone(), Tone::Funny);
        assert!(session.last_output().is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_initialize_clamps_out_of_range_age() {
        let session = Session::initialize(&seed(None, Some("-5"), None));
        assert_eq!(session.age().get(), 1);
        let session = Session::initialize(&seed(None, Some("500"), None));
        assert_eq!(session.age().get(), 100);
    }

    #[test]
    fn test_initialize_defaults_invalid_values() {
        let session = Session::initialize(&seed(None, Some("five"), Some("brooding")));
        assert_eq!(session.age().get(), 5);
        assert_eq!(session.tone(), Tone::Default);
        assert_eq!(session.input_text(), "");
    }

    #[test]
    fn test_apply_preset_clears_output_keeps_age_and_tone() {
        let mut session = Session::new();
        session.set_age(Age::clamped(42));
        session.set_tone(Tone::Poetic);
        session.set_input_text("old question");
        session.begin_request().unwrap();
        session.record_result("old answer");

        session.apply_preset("blockchain");

        assert_eq!(session.input_text(), "blockchain");
        assert!(session.last_output().is_none());
        assert_eq!(session.age().get(), 42);
        assert_eq!(session.tone(), Tone::Poetic);
        // history is reference material and survives preset switches
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_begin_request_rejects_blank_input() {
        let mut session = Session::new();
        assert_eq!(session.begin_request(), Err(DomainError::EmptyInput));
        session.set_input_text("   ");
        assert_eq!(session.begin_request(), Err(DomainError::EmptyInput));
        // nothing mutated
        assert_eq!(*session.phase(), SessionPhase::Idle);
        assert!(session.last_output().is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_begin_request_moves_to_pending() {
        let mut session = Session::new();
        session.set_input_text("What is blockchain?");
        let passage = session.begin_request().unwrap();
        assert_eq!(passage.content(), "What is blockchain?");
        assert!(session.phase().is_pending());
    }

    #[test]
    fn test_record_result_updates_everything_at_once() {
        let mut session = Session::new();
        session.set_input_text("What is blockchain?");
        session.begin_request().unwrap();
        session.record_result("A shared ledger.");

        assert_eq!(session.last_output(), Some("A shared ledger."));
        assert_eq!(session.generated(), 1);
        assert_eq!(*session.phase(), SessionPhase::Displaying);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].input_text, "What is blockchain?");
        assert_eq!(session.history()[0].output, "A shared ledger.");
    }

    #[test]
    fn test_history_never_exceeds_cap() {
        let mut session = Session::new();
        for i in 1..=4 {
            session.set_input_text(format!("question {}", i));
            session.begin_request().unwrap();
            session.record_result(format!("answer {}", i));
        }

        assert_eq!(session.history().len(), HISTORY_CAP);
        // the 3 most recent, newest first
        assert_eq!(session.history()[0].input_text, "question 4");
        assert_eq!(session.history()[1].input_text, "question 3");
        assert_eq!(session.history()[2].input_text, "question 2");
        assert_eq!(session.generated(), 4);
    }

    #[test]
    fn test_two_submissions_newest_first() {
        let mut session = Session::new();
        session.set_input_text("first");
        session.begin_request().unwrap();
        session.record_result("first answer");
        session.set_input_text("second");
        session.begin_request().unwrap();
        session.record_result("second answer");

        assert_eq!(session.history()[0].output, "second answer");
        assert_eq!(session.history()[1].output, "first answer");
    }

    #[test]
    fn test_fail_request_leaves_output_and_history() {
        let mut session = Session::new();
        session.set_input_text("first");
        session.begin_request().unwrap();
        session.record_result("first answer");

        session.set_input_text("second");
        session.begin_request().unwrap();
        session.fail_request("connection reset");

        assert_eq!(session.phase().error(), Some("connection reset"));
        assert_eq!(session.last_output(), Some("first answer"));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_error_state_is_reenterable() {
        let mut session = Session::new();
        session.set_input_text("question");
        session.begin_request().unwrap();
        session.fail_request("boom");

        session.begin_request().unwrap();
        assert!(session.phase().is_pending());
        session.record_result("answer");
        assert_eq!(*session.phase(), SessionPhase::Displaying);
    }
}
