//! HTTP routes for the single-page tool

use crate::output::document::DocumentFormatter;
use crate::web::page;
use crate::web::state::AppState;
use axum::{
    Router,
    extract::{Form, RawQuery, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use eli_application::RunExplainError;
use eli_domain::{Age, SessionSeed, ShareLink, Tone};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

const SESSION_COOKIE: &str = "eli_sid";

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/explain", post(explain))
        .route("/download", get(download))
        .with_state(state)
}

/// Form fields posted by the page.
///
/// `preset` is set when a preset-example button was pressed instead of
/// the submit button.
#[derive(Debug, Deserialize)]
pub struct ExplainForm {
    #[serde(default)]
    text: String,
    age: Option<String>,
    tone: Option<String>,
    preset: Option<String>,
}

/// GET /: render the page, creating (and possibly link-seeding) the session
///
/// The raw query string goes through the domain's share-link parsing so
/// malformed parameters degrade to defaults instead of failing the load.
async fn index(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    let seed = query.as_deref().map(ShareLink::parse_query).unwrap_or_default();
    let cookie_id = session_id_from_headers(&headers);
    let (id, handle) = state.sessions.get_or_seed(cookie_id, &seed);
    let session = handle.lock().await;
    let html = page::render(&session, None, &share_base(&state, &headers));
    with_session_cookie(html, id)
}

/// POST /explain: reconcile widget edits, then run a preset or a request
async fn explain(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ExplainForm>,
) -> Response {
    let cookie_id = session_id_from_headers(&headers);
    let (id, handle) = state.sessions.get_or_seed(cookie_id, &SessionSeed::default());
    let mut session = handle.lock().await;

    // Direct widget edits always win over whatever the session held
    session.set_input_text(form.text);
    if let Some(age) = form.age.as_deref().and_then(Age::parse_clamped) {
        session.set_age(age);
    }
    if let Some(tone) = form.tone.as_deref() {
        session.set_tone(Tone::parse_lenient(tone));
    }

    if let Some(preset_text) = form.preset {
        debug!("Applying preset: {}", preset_text);
        session.apply_preset(preset_text);
        let html = page::render(&session, None, &share_base(&state, &headers));
        return with_session_cookie(html, id);
    }

    let warning = match state.use_case.execute(&mut session, &state.params).await {
        Ok(_) => None,
        // inline warning; the session was left untouched
        Err(RunExplainError::Validation(e)) => Some(e.to_string()),
        // the session phase carries the failure message for rendering
        Err(RunExplainError::Gateway(_)) => None,
    };

    let html = page::render(&session, warning.as_deref(), &share_base(&state, &headers));
    with_session_cookie(html, id)
}

/// GET /download: the most recent explanation as a plain-text document
async fn download(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(handle) = state.sessions.get(session_id_from_headers(&headers)) else {
        return (StatusCode::NOT_FOUND, "No explanation to download yet.\n").into_response();
    };
    let session = handle.lock().await;
    match session.history().first() {
        Some(entry) => (
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"explanation.txt\"",
                ),
            ],
            DocumentFormatter::format(entry),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "No explanation to download yet.\n").into_response(),
    }
}

/// Pull the session id out of the Cookie header, if any
fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE {
            value.parse().ok()
        } else {
            None
        }
    })
}

/// Base address share links are built against
fn share_base(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(base) = &state.share_base_url {
        return base.clone();
    }
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost:8080");
    format!("http://{}/", host)
}

fn with_session_cookie(html: String, id: Uuid) -> Response {
    let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id);
    ([(header::SET_COOKIE, cookie)], Html(html)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_parsed_from_cookie_header() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            format!("theme=dark; {}={}", SESSION_COOKIE, id).parse().unwrap(),
        );
        assert_eq!(session_id_from_headers(&headers), Some(id));
    }

    #[test]
    fn test_missing_or_garbled_cookie_yields_none() {
        assert_eq!(session_id_from_headers(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, "eli_sid=not-a-uuid".parse().unwrap());
        assert_eq!(session_id_from_headers(&headers), None);
    }
}
