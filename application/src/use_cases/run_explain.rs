//! Run Explain use case.
//!
//! Executes one explanation request: validate the session's input, build
//! the prompt, make the single call-and-wait gateway request, and record
//! the outcome. The session is blocked while the call is in flight; there
//! is never more than one request in flight per session, so no locking is
//! needed around the session itself.

use crate::config::RequestParams;
use crate::ports::audit_sink::{AuditRecord, AuditSink, NoAuditSink};
use crate::ports::llm_gateway::{ExplainRequest, GatewayError, LlmGateway};
use eli_domain::util::preview;
use eli_domain::{DomainError, PromptTemplate, Session};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during an explanation request.
#[derive(Error, Debug)]
pub enum RunExplainError {
    /// Blank input. Handled locally; nothing was sent to the LLM and the
    /// session was not touched.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// The external call failed. The session keeps its previous output and
    /// history and moves to the error state.
    #[error("Explanation request failed: {0}")]
    Gateway(#[from] GatewayError),
}

/// Use case for running one explanation request.
///
/// Flow:
/// 1. Validate the input and move the session to `Pending`
/// 2. Build the prompt (pure, deterministic)
/// 3. One gateway call, no retries
/// 4. On success: record the result atomically and append an audit record
/// 5. On failure: move the session to the error state, mutating nothing else
pub struct RunExplainUseCase {
    gateway: Arc<dyn LlmGateway>,
    audit: Arc<dyn AuditSink>,
}

impl Clone for RunExplainUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            audit: self.audit.clone(),
        }
    }
}

impl RunExplainUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            audit: Arc::new(NoAuditSink),
        }
    }

    /// Create with an audit sink.
    pub fn with_audit_sink(mut self, audit: Arc<dyn AuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Execute one explanation request against the given session.
    pub async fn execute(
        &self,
        session: &mut Session,
        params: &RequestParams,
    ) -> Result<String, RunExplainError> {
        let passage = session.begin_request()?;
        let prompt = PromptTemplate::explain(&passage, session.age(), session.tone());

        info!(
            "Explaining '{}' at age {} ({})",
            preview(passage.content(), 80),
            session.age(),
            session.tone()
        );
        debug!(
            model = %params.model,
            temperature = params.temperature,
            "Sending explanation request"
        );

        let request = ExplainRequest {
            model: params.model.clone(),
            prompt,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        match self.gateway.explain(&request).await {
            Ok(text) => {
                session.record_result(text.clone());
                self.audit.append(AuditRecord::new(
                    session.age().get(),
                    passage.content(),
                    text.as_str(),
                ));
                debug!("Explanation received ({} bytes)", text.len());
                Ok(text)
            }
            Err(e) => {
                session.fail_request(e.to_string());
                Err(RunExplainError::Gateway(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use eli_domain::{SessionPhase, Tone};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockGateway {
        responses: Mutex<VecDeque<Result<String, GatewayError>>>,
        calls: Mutex<Vec<ExplainRequest>>,
    }

    impl MockGateway {
        fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn last_prompt(&self) -> Option<String> {
            self.calls.lock().unwrap().last().map(|r| r.prompt.clone())
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn explain(&self, request: &ExplainRequest) -> Result<String, GatewayError> {
            self.calls.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::RequestFailed("no more responses".into())))
        }
    }

    struct RecordingSink {
        records: Mutex<Vec<AuditRecord>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
            }
        }
    }

    impl AuditSink for RecordingSink {
        fn append(&self, record: AuditRecord) {
            self.records.lock().unwrap().push(record);
        }
    }

    fn session_with_input(text: &str) -> Session {
        let mut session = Session::new();
        session.set_input_text(text);
        session
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_successful_explanation() {
        let gateway = Arc::new(MockGateway::new(vec![Ok("A shared ledger.".to_string())]));
        let use_case = RunExplainUseCase::new(gateway.clone());
        let mut session = session_with_input("What is blockchain?");

        let text = use_case
            .execute(&mut session, &RequestParams::default())
            .await
            .unwrap();

        assert_eq!(text, "A shared ledger.");
        assert_eq!(session.last_output(), Some("A shared ledger."));
        assert_eq!(*session.phase(), SessionPhase::Displaying);
        assert_eq!(session.history().len(), 1);
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_prompt_reaches_gateway() {
        let gateway = Arc::new(MockGateway::new(vec![Ok("ok".to_string())]));
        let use_case = RunExplainUseCase::new(gateway.clone());
        let mut session = session_with_input("Explain inflation");
        session.set_age(eli_domain::Age::clamped(30));
        session.set_tone(Tone::Sarcastic);

        use_case
            .execute(&mut session, &RequestParams::default())
            .await
            .unwrap();

        let prompt = gateway.last_prompt().unwrap();
        assert!(prompt.contains("Explain inflation"));
        assert!(prompt.contains("30 years old"));
        assert!(prompt.contains("Use a sarcastic tone."));
    }

    #[tokio::test]
    async fn test_blank_input_never_reaches_gateway() {
        let gateway = Arc::new(MockGateway::new(vec![Ok("unused".to_string())]));
        let use_case = RunExplainUseCase::new(gateway.clone());

        for input in ["", "   "] {
            let mut session = session_with_input(input);
            let result = use_case
                .execute(&mut session, &RequestParams::default())
                .await;

            assert!(matches!(
                result,
                Err(RunExplainError::Validation(DomainError::EmptyInput))
            ));
            assert!(session.last_output().is_none());
            assert!(session.history().is_empty());
            assert_eq!(*session.phase(), SessionPhase::Idle);
        }
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_gateway_failure_preserves_state() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok("first answer".to_string()),
            Err(GatewayError::RateLimited("429".to_string())),
        ]));
        let use_case = RunExplainUseCase::new(gateway.clone());
        let mut session = session_with_input("first");

        use_case
            .execute(&mut session, &RequestParams::default())
            .await
            .unwrap();

        session.set_input_text("second");
        let result = use_case
            .execute(&mut session, &RequestParams::default())
            .await;

        assert!(matches!(result, Err(RunExplainError::Gateway(_))));
        // output and history untouched from before the attempt
        assert_eq!(session.last_output(), Some("first answer"));
        assert_eq!(session.history().len(), 1);
        assert!(session.phase().error().unwrap().contains("429"));
    }

    #[tokio::test]
    async fn test_audit_record_per_success_only() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok("answer".to_string()),
            Err(GatewayError::ConnectionError("reset".to_string())),
        ]));
        let sink = Arc::new(RecordingSink::new());
        let use_case = RunExplainUseCase::new(gateway).with_audit_sink(sink.clone());
        let mut session = session_with_input("What is ROI?");
        session.set_age(eli_domain::Age::clamped(12));

        use_case
            .execute(&mut session, &RequestParams::default())
            .await
            .unwrap();
        let _ = use_case
            .execute(&mut session, &RequestParams::default())
            .await;

        let records = sink.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].age, 12);
        assert_eq!(records[0].input_text, "What is ROI?");
        assert_eq!(records[0].explanation, "answer");
    }

    #[tokio::test]
    async fn test_history_caps_at_three_across_requests() {
        let gateway = Arc::new(MockGateway::new(
            (1..=4).map(|i| Ok(format!("answer {}", i))).collect(),
        ));
        let use_case = RunExplainUseCase::new(gateway);
        let mut session = Session::new();

        for i in 1..=4 {
            session.set_input_text(format!("question {}", i));
            use_case
                .execute(&mut session, &RequestParams::default())
                .await
                .unwrap();
        }

        assert_eq!(session.history().len(), 3);
        assert_eq!(session.history()[0].output, "answer 4");
        assert_eq!(session.history()[2].output, "answer 2");
    }
}
