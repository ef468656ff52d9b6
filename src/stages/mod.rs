pub mod stage0_normalize;
pub mod stage1_segment;
pub mod stage2_interactions;
pub mod stage3_render;

pub use stage0_normalize::*;
pub use stage1_segment::*;
pub use stage2_interactions::*;
pub use stage3_render::*;

use tracing::{info, warn};

use crate::error::ExtractionError;
use crate::heuristics::{
    classify_sentiment, extract_bill_context, extract_procedural_markers, ExtractionConfig,
};
use crate::models::{Roster, SegmentRecord, TranscriptExtraction};
use crate::patterns::PatternLibrary;

/// Run Stages 0-2 over one date's raw transcript text.
///
/// Segmentation that finds no speakers is logged and yields an empty
/// extraction rather than an error.
pub fn process_transcript(
    raw_text: &str,
    date: &str,
    roster: &Roster,
    patterns: &PatternLibrary,
    config: &ExtractionConfig,
) -> Result<TranscriptExtraction, ExtractionError> {
    let text = normalize_text(raw_text, patterns);
    let session_date = detect_session_date(&text, patterns);

    let utterances = attach_member_ids(segment_speakers(&text, date, patterns), roster);
    if utterances.is_empty() && !text.is_empty() {
        warn!(
            "No speaker headers recognized for {} ({} chars left unsegmented)",
            date,
            text.len()
        );
    }

    let interactions = extract_interactions(&utterances, patterns, config)?;

    let segments: Vec<SegmentRecord> = utterances
        .into_iter()
        .map(|utterance| SegmentRecord {
            sentiment: classify_sentiment(&utterance.text, patterns),
            bill_context: extract_bill_context(&utterance.text, patterns),
            markers: extract_procedural_markers(&utterance.text, patterns),
            utterance,
        })
        .collect();

    info!(
        "{}: {} segments, {} interactions",
        date,
        segments.len(),
        interactions.len()
    );

    Ok(TranscriptExtraction {
        date: date.to_string(),
        session_date,
        segments,
        interactions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InteractionType, RosterEntry, Sentiment};

    fn roster() -> Roster {
        let names = [(1, "Adams"), (2, "Baker"), (3, "Carter")];
        Roster::new(
            names
                .iter()
                .map(|(id, name)| RosterEntry {
                    member_id: *id,
                    name: name.to_string(),
                    district: None,
                    session_year: Some(2025),
                })
                .collect(),
        )
    }

    const TRANSCRIPT: &str = "NYS ASSEMBLY                     JUNE 11, 2025\n\
1WEDNESDAY, JUNE 11, 2025\n\
ACTING SPEAKER AUBRY:  The Clerk will read.\n\
THE CLERK: Rules Report No. 412, Calendar No. 1080,\n\
Assembly No. A07321-B, by Mr. Adams.\n\
ACTING SPEAKER AUBRY: Mr. Baker.\n\
MR. ADAMS: I agree with the sponsor of the\n\
NYS ASSEMBLY                     JUNE 11, 2025\n\
2\n\
3original bill.\n\
MR. BAKER: Will the sponsor yield? Thank you, Mr. ADAMS.\n\
(Applause)\n\
MR. CARTER: Will Mr. Baker yield?\n";

    #[test]
    fn test_process_transcript_end_to_end() {
        let patterns = PatternLibrary::new().unwrap();
        let extraction = process_transcript(
            TRANSCRIPT,
            "2025-06-11",
            &roster(),
            &patterns,
            &ExtractionConfig::default(),
        )
        .unwrap();

        assert_eq!(extraction.session_date, chrono::NaiveDate::from_ymd_opt(2025, 6, 11));
        assert_eq!(extraction.segments.len(), 6);
        assert_eq!(extraction.member_segment_count(), 3);

        let clerk = &extraction.segments[1];
        assert_eq!(clerk.utterance.speaker_name, "THE CLERK");
        assert_eq!(clerk.bill_context.bill_number.as_deref(), Some("A07321-B"));
        assert_eq!(clerk.bill_context.calendar_number.as_deref(), Some("1080"));

        let adams = &extraction.segments[3];
        assert_eq!(adams.utterance.text, "I agree with the sponsor of the\noriginal bill.");
        assert_eq!(adams.sentiment, Sentiment::Agreement);

        let summary: Vec<(InteractionType, u64, u64, u32)> = extraction
            .interactions
            .iter()
            .map(|r| (r.interaction_type, r.from_member_id, r.to_member_id, r.sequence))
            .collect();
        assert_eq!(
            summary,
            vec![
                (InteractionType::Question, 2, 1, 5),
                (InteractionType::Response, 2, 1, 5),
                (InteractionType::Question, 3, 2, 6),
            ]
        );
    }

    #[test]
    fn test_unsegmentable_text_is_empty_not_error() {
        let patterns = PatternLibrary::new().unwrap();
        let extraction = process_transcript(
            "Just some prose without any speakers.",
            "2025-06-12",
            &roster(),
            &patterns,
            &ExtractionConfig::default(),
        )
        .unwrap();

        assert!(extraction.segments.is_empty());
        assert!(extraction.interactions.is_empty());
        assert!(extraction.session_date.is_none());
    }
}
