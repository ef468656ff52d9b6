use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BillContext, InteractionRecord, ProceduralMarkers, Sentiment, SpeakerUtterance};

/// One segment as handed to storage: the utterance plus its per-utterance annotations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRecord {
    #[serde(flatten)]
    pub utterance: SpeakerUtterance,
    pub sentiment: Sentiment,
    #[serde(default, skip_serializing_if = "BillContext::is_empty")]
    pub bill_context: BillContext,
    pub markers: ProceduralMarkers,
}

/// Everything extracted from one transcript date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptExtraction {
    /// Date key the transcript was ingested under
    pub date: String,
    /// Session date read from the transcript header, if present
    pub session_date: Option<NaiveDate>,
    pub segments: Vec<SegmentRecord>,
    pub interactions: Vec<InteractionRecord>,
}

impl TranscriptExtraction {
    /// Segments whose speaker resolved to a roster member
    pub fn member_segment_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| s.utterance.member_id.is_some())
            .count()
    }
}
