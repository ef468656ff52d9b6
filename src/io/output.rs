use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::TranscriptExtraction;

/// Write an extraction as pretty-printed JSON
pub fn write_extraction_json(extraction: &TranscriptExtraction, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, extraction).context("Failed to write JSON")?;
    Ok(())
}

const BODY_INDENT: &str = "    ";

/// Human-readable report of segments and interactions
pub struct HumanReport<'a> {
    extraction: &'a TranscriptExtraction,
    wrap_width: usize,
}

impl<'a> HumanReport<'a> {
    pub fn new(extraction: &'a TranscriptExtraction, wrap_width: usize) -> Self {
        Self {
            extraction,
            wrap_width,
        }
    }

    /// Format the extraction as text
    pub fn format(&self) -> String {
        let mut output = String::new();

        let heading = match self.extraction.session_date {
            Some(date) => format!("Session {} ({})", self.extraction.date, date.format("%A, %B %-d, %Y")),
            None => format!("Session {}", self.extraction.date),
        };
        output.push_str(&heading);
        output.push_str("\n\n");

        for segment in &self.extraction.segments {
            let utterance = &segment.utterance;
            let member = utterance
                .member_id
                .map(|id| format!(" #{}", id))
                .unwrap_or_default();
            output.push_str(&format!(
                "[{:04}] {}{} ({}):\n",
                utterance.sequence, utterance.speaker_name, member, segment.sentiment
            ));
            output.push_str(&wrap_text(&utterance.text, self.wrap_width, BODY_INDENT));
            output.push_str("\n\n");
        }

        output.push_str(&format!("Interactions ({})\n", self.extraction.interactions.len()));
        for record in &self.extraction.interactions {
            output.push_str(&format!(
                "[{:04}] {} -> {} {} ({}): {}\n",
                record.sequence,
                record.from_member_name,
                record.to_member_name,
                record.interaction_type,
                record.sentiment,
                record.text_snippet.split_whitespace().collect::<Vec<_>>().join(" ")
            ));
        }

        output
    }

    /// Write to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

/// Wrap an utterance body under its speaker label.
///
/// Every line is indented so bodies never read as a new "NAME:" header, and
/// blank-line paragraph breaks from the transcript are kept.
fn wrap_text(text: &str, width: usize, indent: &str) -> String {
    let line_width = width.saturating_sub(indent.len()).max(1);

    text.split("\n\n")
        .map(|paragraph| wrap_paragraph(paragraph, line_width, indent))
        .filter(|paragraph| !paragraph.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn wrap_paragraph(paragraph: &str, width: usize, indent: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in paragraph.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
        .iter()
        .map(|line| format!("{}{}", indent, line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BillContext, InteractionRecord, InteractionType, ProceduralMarkers, SegmentRecord,
        Sentiment, SpeakerUtterance,
    };

    fn extraction() -> TranscriptExtraction {
        TranscriptExtraction {
            date: "2025-06-11".to_string(),
            session_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 11),
            segments: vec![SegmentRecord {
                utterance: SpeakerUtterance::new(
                    "BAKER",
                    Some(2),
                    "Will the sponsor yield?",
                    "2025-06-11",
                    2,
                ),
                sentiment: Sentiment::Neutral,
                bill_context: BillContext::default(),
                markers: ProceduralMarkers {
                    questions: 1,
                    ..Default::default()
                },
            }],
            interactions: vec![InteractionRecord {
                from_member_id: 2,
                from_member_name: "BAKER".to_string(),
                to_member_id: 1,
                to_member_name: "ADAMS".to_string(),
                interaction_type: InteractionType::Question,
                sentiment: Sentiment::Neutral,
                text_snippet: "Will the sponsor\nyield".to_string(),
                date: "2025-06-11".to_string(),
                sequence: 2,
            }],
        }
    }

    #[test]
    fn test_wrap_text_indents_and_keeps_paragraphs() {
        let text = "I rise to explain my vote on\nthis bill.\n\nMR. SMITH: was quoted here.";
        let wrapped = wrap_text(text, 24, "    ");

        let paragraphs: Vec<&str> = wrapped.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 2);
        for line in wrapped.lines().filter(|l| !l.is_empty()) {
            assert!(line.starts_with("    "));
            assert!(line.len() <= 24, "line too long: {:?}", line);
        }
        assert!(paragraphs[1].starts_with("    MR. SMITH:"));
    }

    #[test]
    fn test_wrap_text_long_word_on_own_line() {
        let wrapped = wrap_text("a supercalifragilistic b", 10, "  ");
        assert_eq!(wrapped, "  a\n  supercalifragilistic\n  b");
    }

    #[test]
    fn test_human_report_format() {
        let extraction = extraction();
        let report = HumanReport::new(&extraction, 80).format();

        assert!(report.starts_with("Session 2025-06-11 (Wednesday, June 11, 2025)"));
        assert!(report.contains("[0002] BAKER #2 (neutral):\n    Will the sponsor yield?"));
        assert!(report.contains("[0002] BAKER -> ADAMS question (neutral): Will the sponsor yield"));
    }

    #[test]
    fn test_write_extraction_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2025-06-11.json");

        write_extraction_json(&extraction(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["session_date"], "2025-06-11");
        assert_eq!(value["segments"][0]["speaker_name"], "BAKER");
        assert_eq!(value["segments"][0]["sequence"], 2);
        assert!(value["segments"][0].get("bill_context").is_none());
        assert_eq!(value["interactions"][0]["interaction_type"], "question");
    }
}
