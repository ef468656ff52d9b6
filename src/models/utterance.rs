use serde::{Deserialize, Serialize};

/// One contiguous block of speech by a single speaker within a transcript date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerUtterance {
    /// Label as it appeared in the header ("SMITH", "ACTING SPEAKER AUBRY", "THE CLERK")
    pub speaker_name: String,
    /// Roster identifier, present only when the speaker is a resolvable member
    pub member_id: Option<u64>,
    /// Utterance body
    pub text: String,
    /// Transcript date key
    pub date: String,
    /// 1-based position within the date
    pub sequence: u32,
}

impl SpeakerUtterance {
    pub fn new(
        speaker_name: impl Into<String>,
        member_id: Option<u64>,
        text: impl Into<String>,
        date: impl Into<String>,
        sequence: u32,
    ) -> Self {
        Self {
            speaker_name: speaker_name.into(),
            member_id,
            text: text.into(),
            date: date.into(),
            sequence,
        }
    }

    /// Speaker label upper-cased and trimmed, the form used for name matching
    pub fn canonical_name(&self) -> String {
        canonicalize_name(&self.speaker_name)
    }
}

/// Upper-case a name and collapse any internal whitespace (including line wraps)
pub fn canonicalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
