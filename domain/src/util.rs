//! Shared utility functions.

/// Shorten a string for log lines.
///
/// Keeps at most `max_chars` characters and appends an ellipsis when
/// anything was cut. Counts characters, not bytes, so multi-byte input is
/// never split.
pub fn preview(s: &str, max_chars: usize) -> String {
    let mut chars = s.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}…", head)
    } else {
        head
    }
}
