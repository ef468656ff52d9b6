pub mod error;
pub mod heuristics;
pub mod io;
pub mod models;
pub mod patterns;
pub mod stages;

pub use error::ExtractionError;
pub use heuristics::{classify_sentiment, extract_bill_context, resolve_member, ExtractionConfig};
pub use io::{group_by_date, load_roster, read_transcript_parts, HumanReport};
pub use models::{
    InteractionRecord, InteractionType, MemberNameIndex, Roster, RosterEntry, SegmentRecord,
    Sentiment, SpeakerUtterance, TranscriptExtraction,
};
pub use patterns::PatternLibrary;
pub use stages::{
    extract_interactions, normalize_text, process_transcript, render_extraction,
    segment_speakers, RenderConfig,
};
