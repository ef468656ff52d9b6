use thiserror::Error;

/// Errors raised by the extraction core.
///
/// Missing pattern matches and unresolved names are not errors; only inputs
/// that would silently corrupt the output are rejected.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("pattern `{name}` failed to compile")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("utterances for {date} are not in sequence order: {found} follows {previous}")]
    UnsortedSequence {
        date: String,
        previous: u32,
        found: u32,
    },

    #[error("utterance list mixes dates: expected {expected}, found {found}")]
    MixedDates { expected: String, found: String },
}
