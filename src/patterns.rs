use regex::Regex;

use crate::error::ExtractionError;

/// Honorific and role prefixes that open a speaker header.
pub const SPEAKER_PREFIXES: [&str; 5] = ["MR.", "MRS.", "MS.", "ACTING SPEAKER", "THE CLERK"];

/// Roles that never originate or receive interactions
pub const PRESIDING_ROLE_MARKERS: [&str; 2] = ["ACTING SPEAKER", "CLERK"];

/// Immutable table of every text recognizer used by the pipeline.
///
/// Build it once at startup and hand out references (or an `Arc`); nothing
/// in the crate mutates it after construction.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    // Normalizer boilerplate
    pub masthead: Regex,
    pub standalone_page_number: Regex,
    pub page_number_prefix: Regex,
    pub part_separator: Regex,
    pub excess_newlines: Regex,
    pub excess_spaces: Regex,

    // Segmentation
    pub speaker_header: Regex,
    pub stage_direction: Regex,
    pub session_date: Regex,

    // Bill context
    pub bill_number: Regex,
    pub calendar_number: Regex,
    pub rules_report: Regex,
    pub amendment_number: Regex,

    // Interactions
    pub yield_question: Regex,
    pub direct_address: Regex,
    pub thank_response: Regex,
    pub honorific: Regex,

    // Sentiment, checked in this order: amendment offer, disagreement, agreement
    pub amendment_offer: Regex,
    pub disagreement: Regex,
    pub agreement: Regex,

    // Procedural markers
    pub question_mark: Regex,
    pub motion: Regex,
    pub call_committee: Regex,
}

impl PatternLibrary {
    pub fn new() -> Result<Self, ExtractionError> {
        Ok(Self {
            masthead: compile(
                "masthead",
                r"\n?NYS ASSEMBLY\s+[A-Z]+\s+\d{1,2},\s+\d{4}\s*\n?",
            )?,
            standalone_page_number: compile(
                "standalone_page_number",
                r"(?m)^[ \t]*\d{1,4}[ \t]*(?:\n|$)",
            )?,
            page_number_prefix: compile("page_number_prefix", r"\n\d{1,3}([a-z])")?,
            part_separator: compile("part_separator", r"(?m)^[ \t]*--- PART \d+ ---[ \t]*(?:\n|$)")?,
            excess_newlines: compile("excess_newlines", r"\n{3,}")?,
            excess_spaces: compile("excess_spaces", r" {2,}")?,

            speaker_header: compile(
                "speaker_header",
                &format!(
                    r"(?m)^({})(?:[ \t]+([A-Z][A-Z\-']*))?:",
                    SPEAKER_PREFIXES
                        .iter()
                        .map(|prefix| regex::escape(prefix))
                        .collect::<Vec<_>>()
                        .join("|")
                ),
            )?,
            stage_direction: compile("stage_direction", r"(?m)^[ \t]*[\(\[]")?,
            session_date: compile(
                "session_date",
                r"(?m)^\d*([A-Z]+,\s+[A-Z]+\s+\d{1,2},\s+\d{4})",
            )?,

            bill_number: compile(
                "bill_number",
                r"(?i)(?:Assembly|Senate) No\.\s+([AS]\d{5}(?:-[A-Z])?)",
            )?,
            calendar_number: compile("calendar_number", r"(?i)Calendar No\.\s+(\d+)")?,
            rules_report: compile("rules_report", r"(?i)Rules Report No\.\s+(\d+)")?,
            amendment_number: compile(
                "amendment_number",
                r"(?i)amendment\s+(?:number\s+)?(\d+)",
            )?,

            yield_question: compile(
                "yield_question",
                r"(?i)Will\s+(?:the\s+sponsor|(?:Mr\.|Mrs\.|Ms\.)\s+([A-Z\-']+))\s+yield",
            )?,
            direct_address: compile(
                "direct_address",
                r"(?i)((?:Mr\.|Mrs\.|Ms\.)\s+[A-Z\-']+)",
            )?,
            thank_response: compile(
                "thank_response",
                r"(?i)Thank you,?\s+((?:Mr\.|Mrs\.|Ms\.)\s+[A-Z\-']+)",
            )?,
            honorific: compile("honorific", r"^(?:MR|MRS|MS)\.\s*")?,

            amendment_offer: compile(
                "amendment_offer",
                r"(?i)\b(I offer (?:the following )?amendment|I have an amendment|amendment to|propose an amendment|following amendment)\b",
            )?,
            disagreement: compile(
                "disagreement",
                r"(?i)\b(I disagree|I oppose|I'm against|I object|that's incorrect|that's wrong|respectfully disagree|I don't think|I would argue)\b",
            )?,
            agreement: compile(
                "agreement",
                r"(?i)\b(I agree|I support|I'm in favor|absolutely|exactly|correct|that's right|I concur|yes)\b",
            )?,

            question_mark: compile("question_mark", r"\?")?,
            motion: compile("motion", r"(?i)\bmove\b")?,
            call_committee: compile("call_committee", r"(?i)call.*?committee")?,
        })
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex, ExtractionError> {
    Regex::new(pattern).map_err(|source| ExtractionError::InvalidPattern { name, source })
}

/// Whether a speaker label belongs to a presiding officer or clerk
pub fn is_presiding_role(speaker_name: &str) -> bool {
    PRESIDING_ROLE_MARKERS
        .iter()
        .any(|marker| speaker_name.contains(marker))
}
