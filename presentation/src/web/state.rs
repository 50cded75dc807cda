//! Shared web application state

use eli_application::{RequestParams, RunExplainUseCase};
use eli_domain::{Session, SessionSeed};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use uuid::Uuid;

/// Handle to one client's session.
///
/// The async mutex is held across the in-flight LLM call: a client never
/// has more than one request in flight, and other clients' sessions are
/// untouched; there is no shared mutable state across sessions.
pub type SessionHandle = Arc<tokio::sync::Mutex<Session>>;

/// Shared state for the web app
#[derive(Clone)]
pub struct AppState {
    pub use_case: Arc<RunExplainUseCase>,
    pub params: Arc<RequestParams>,
    /// Configured share-link base; when `None`, links are derived from
    /// the request's Host header.
    pub share_base_url: Option<String>,
    pub sessions: SessionStore,
}

/// In-process store owning one [`Session`] per connected client.
///
/// The map lock only guards lookup and insertion, never across an await point.
/// Sessions live for the life of the process; there is no persistence
/// across restarts.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, SessionHandle>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch an existing session, or create one seeded from query
    /// parameters.
    ///
    /// Seeding happens only here, on creation: an existing session never
    /// re-reads query parameters, so in-session edits always win over a
    /// stale link.
    pub fn get_or_seed(&self, id: Option<Uuid>, seed: &SessionSeed) -> (Uuid, SessionHandle) {
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(id) = id
            && let Some(existing) = map.get(&id)
        {
            return (id, existing.clone());
        }
        let id = Uuid::new_v4();
        let handle: SessionHandle = Arc::new(tokio::sync::Mutex::new(Session::initialize(seed)));
        map.insert(id, handle.clone());
        (id, handle)
    }

    /// Fetch an existing session without creating one
    pub fn get(&self, id: Option<Uuid>) -> Option<SessionHandle> {
        let map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        id.and_then(|id| map.get(&id).cloned())
    }
}
