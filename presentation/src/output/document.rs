//! Downloadable plain-text document for one explanation

use eli_domain::HistoryEntry;

/// Formats one explanation as a plain-text document with labeled
/// sections: human-readable, no machine-parseable structure required.
pub struct DocumentFormatter;

impl DocumentFormatter {
    pub fn format(entry: &HistoryEntry) -> String {
        format!(
            "Input:\n{}\n\nAge level:\n{}\n\nTone:\n{}\n\nExplanation:\n{}\n",
            entry.input_text, entry.age, entry.tone, entry.output
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eli_domain::{Age, Tone};

    #[test]
    fn test_sections_in_order() {
        let entry = HistoryEntry {
            input_text: "What is blockchain?".to_string(),
            age: Age::clamped(5),
            tone: Tone::Funny,
            output: "A shared ledger, but silly.".to_string(),
        };

        let doc = DocumentFormatter::format(&entry);

        let input = doc.find("Input:\nWhat is blockchain?").unwrap();
        let age = doc.find("Age level:\n5").unwrap();
        let tone = doc.find("Tone:\nFunny").unwrap();
        let explanation = doc.find("Explanation:\nA shared ledger, but silly.").unwrap();
        assert!(input < age && age < tone && tone < explanation);
    }
}
