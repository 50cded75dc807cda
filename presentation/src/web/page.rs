//! Server-rendered single page

use eli_domain::{Session, ShareLink, Tone};
use std::fmt::Write;

/// Preset examples: (button label, input text)
pub const PRESETS: &[(&str, &str)] = &[
    ("Blockchain", "blockchain"),
    ("Customer Lifetime Value", "customer lifetime value"),
    ("Microservices", "microservices"),
];

/// Escape text for HTML element content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the whole page for the session's current state
///
/// `warning` is an inline validation message; external-call failures are
/// read from the session phase instead.
pub fn render(session: &Session, warning: Option<&str>, share_base: &str) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Explain Like I'm...</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 44rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
  h1 { text-align: center; }
  form { display: grid; gap: 0.75rem; }
  textarea { width: 100%; min-height: 4rem; font: inherit; padding: 0.5rem; }
  .presets button { margin-right: 0.5rem; }
  .warning { background: #fff3cd; border: 1px solid #e0c869; padding: 0.5rem 0.75rem; border-radius: 4px; }
  .error { background: #f8d7da; border: 1px solid #d9a0a7; padding: 0.5rem 0.75rem; border-radius: 4px; }
  .output { background: #f4f6f8; padding: 0.75rem 1rem; border-radius: 4px; white-space: pre-wrap; cursor: pointer; }
  .history { border-top: 1px solid #ddd; margin-top: 1.5rem; padding-top: 0.5rem; }
  .history article { border-bottom: 1px dashed #ddd; padding: 0.5rem 0; }
  .meta { color: #666; font-size: 0.85rem; }
  footer { margin-top: 2rem; color: #666; font-size: 0.85rem; }
</style>
</head>
<body>
<h1>Explain Like I'm...</h1>
"#,
    );

    // Input form: widgets always reflect the session's canonical state
    let _ = write!(
        html,
        r#"<form method="post" action="/explain">
<label for="text">What do you want explained?</label>
<textarea id="text" name="text" placeholder="Enter a concept (e.g. blockchain, ROI, Kubernetes)">{text}</textarea>
<div class="presets">Try an example:
"#,
        text = escape_html(session.input_text()),
    );
    for (label, preset) in PRESETS {
        let _ = write!(
            html,
            r#"<button type="submit" name="preset" value="{value}">{label}</button>
"#,
            value = escape_html(preset),
            label = escape_html(label),
        );
    }
    let _ = write!(
        html,
        r#"</div>
<label for="age">Explain at age <output id="agev">{age}</output></label>
<input type="range" id="age" name="age" min="1" max="100" value="{age}"
       oninput="document.getElementById('agev').value = this.value">
<label for="tone">Add a tone or style?</label>
<select id="tone" name="tone">
"#,
        age = session.age(),
    );
    for tone in Tone::ALL {
        let _ = write!(
            html,
            r#"<option value="{name}"{selected}>{name}</option>
"#,
            name = tone.as_str(),
            selected = if tone == session.tone() { " selected" } else { "" },
        );
    }
    html.push_str(
        r#"</select>
<button type="submit">&#10024; Explain it!</button>
</form>
"#,
    );

    if let Some(warning) = warning {
        let _ = write!(
            html,
            "<p class=\"warning\">{}</p>\n",
            escape_html(warning)
        );
    }
    if let Some(reason) = session.phase().error() {
        let _ = write!(
            html,
            "<p class=\"error\">Something went wrong: {}</p>\n",
            escape_html(reason)
        );
    }

    if let Some(output) = session.last_output() {
        let _ = write!(
            html,
            r#"<h2>&#129299; Explanation</h2>
<div class="output" id="output" data-text="{text}" title="Click to reveal everything"></div>
<p><a href="/download">Download as text</a></p>
"#,
            text = escape_html(output),
        );
    }

    // Share link reproduces the inputs, never the output
    let _ = write!(
        html,
        r#"<p class="meta">Share this setup: <a href="{link}">{link}</a></p>
"#,
        link = escape_html(&ShareLink::build(session, share_base)),
    );

    if !session.history().is_empty() {
        html.push_str("<section class=\"history\">\n<h2>Recent explanations</h2>\n");
        for entry in session.history() {
            let _ = write!(
                html,
                r#"<article>
<p class="meta">{input} &middot; age {age} &middot; {tone}</p>
<p>{output}</p>
</article>
"#,
                input = escape_html(&entry.input_text),
                age = entry.age,
                tone = entry.tone,
                output = escape_html(&entry.output),
            );
        }
        html.push_str("</section>\n");
    }

    let _ = write!(
        html,
        "<footer>Total explanations generated this session: <strong>{}</strong></footer>\n",
        session.generated()
    );

    // Typing reveal: purely presentational pacing over the complete
    // string, client-side and skippable by clicking the output box
    html.push_str(
        r#"<script>
(function () {
  var el = document.getElementById('output');
  if (!el) return;
  var full = el.dataset.text;
  var i = 0;
  var timer = setInterval(function () {
    i += 3;
    el.textContent = full.slice(0, i);
    if (i >= full.length) clearInterval(timer);
  }, 15);
  el.addEventListener('click', function () {
    clearInterval(timer);
    el.textContent = full;
  });
})();
</script>
</body>
</html>
"#,
    );

    html
}
