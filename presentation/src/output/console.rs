//! Console output formatter for one-shot explanations

use colored::Colorize;
use eli_domain::{HistoryEntry, Tone};

/// Formats explanation results for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a completed explanation for the terminal
    pub fn format(entry: &HistoryEntry) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            "Explaining:".cyan().bold(),
            entry.input_text
        ));
        match entry.tone {
            Tone::Default => {
                output.push_str(&format!("{} {}\n", "Age level:".cyan().bold(), entry.age));
            }
            tone => {
                output.push_str(&format!(
                    "{} {}  {} {}\n",
                    "Age level:".cyan().bold(),
                    entry.age,
                    "Tone:".cyan().bold(),
                    tone
                ));
            }
        }
        output.push('\n');
        output.push_str(&entry.output);
        output.push('\n');

        output
    }

    /// Format a share link line
    pub fn format_share_link(link: &str) -> String {
        format!("\n{} {}\n", "Share link:".cyan().bold(), link)
    }
}
