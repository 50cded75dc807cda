//! Share links: reproducing a session's inputs from a URL

use crate::session::entities::Session;

/// Raw query-parameter bundle used to seed a session
///
/// Values are kept as the strings they arrived as; all parsing, clamping,
/// and fallback happens in [`Session::initialize`]. Malformed values
/// degrade to defaults rather than failing the page load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSeed {
    pub text: Option<String>,
    pub age: Option<String>,
    pub tone: Option<String>,
}

impl SessionSeed {
    /// True when no recognised parameter was present at all
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.age.is_none() && self.tone.is_none()
    }
}

/// Derived share URL for a session's current inputs
///
/// Encodes `input_text`, `age`, and `tone`, never output or history; an
/// explanation is always regenerated when a link is opened.
pub struct ShareLink;

impl ShareLink {
    /// Build the share URL against a base address
    pub fn build(session: &Session, base_url: &str) -> String {
        format!(
            "{}?text={}&age={}&tone={}",
            base_url,
            urlencoding::encode(session.input_text()),
            session.age(),
            urlencoding::encode(session.tone().as_str()),
        )
    }

    /// Parse the query-string portion of a share link back into a seed
    ///
    /// Unknown parameters are ignored; undecodable values are passed
    /// through raw so the seed's own fallback rules apply.
    pub fn parse_query(query: &str) -> SessionSeed {
        let mut seed = SessionSeed::default();
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let value = urlencoding::decode(value)
                .map(|c| c.into_owned())
                .unwrap_or_else(|_| value.to_string());
            match key {
                "text" => seed.text = Some(value),
                "age" => seed.age = Some(value),
                "tone" => seed.tone = Some(value),
                _ => {}
            }
        }
        seed
    }
}
