use tracing::debug;

use crate::heuristics::resolve_member;
use crate::models::{Roster, SpeakerUtterance};
use crate::patterns::{is_presiding_role, PatternLibrary};

/// Perform Stage 1: split normalized text into per-speaker utterances.
///
/// Each speaker header ("MR. SMITH:", "ACTING SPEAKER AUBRY:", "THE CLERK:")
/// opens an utterance that runs until the next header or the first line
/// opening a parenthetical or bracketed stage direction. Text after the last
/// header belongs to that header. Returns an empty list when no header is
/// found; the caller decides how to report that.
pub fn segment_speakers(text: &str, date: &str, patterns: &PatternLibrary) -> Vec<SpeakerUtterance> {
    let headers: Vec<(usize, usize, String)> = patterns
        .speaker_header
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let prefix = caps.get(1)?.as_str();
            let surname = caps.get(2).map(|m| m.as_str());
            Some((whole.start(), whole.end(), speaker_label(prefix, surname)))
        })
        .collect();

    if let Some((first_start, _, _)) = headers.first() {
        if *first_start > 0 {
            debug!("Dropping {} bytes of preamble before the first speaker", first_start);
        }
    }

    headers
        .iter()
        .enumerate()
        .map(|(rank, (_, body_start, speaker_name))| {
            let body_end = headers
                .get(rank + 1)
                .map(|(next_start, _, _)| *next_start)
                .unwrap_or(text.len());
            let body = cut_stage_direction(&text[*body_start..body_end], patterns);

            SpeakerUtterance::new(
                speaker_name.clone(),
                None,
                body.trim(),
                date,
                rank as u32 + 1,
            )
        })
        .collect()
}

/// Attach roster ids to member speakers; presiding roles and unknown names stay unresolved
pub fn attach_member_ids(utterances: Vec<SpeakerUtterance>, roster: &Roster) -> Vec<SpeakerUtterance> {
    utterances
        .into_iter()
        .map(|mut utterance| {
            let name = utterance.canonical_name();
            utterance.member_id = if is_presiding_role(&name) {
                None
            } else {
                resolve_member(&name, roster.index()).map(|m| m.member_id)
            };
            if utterance.member_id.is_none() && !is_presiding_role(&name) {
                debug!("Speaker {} is not on the roster", name);
            }
            utterance
        })
        .collect()
}

fn speaker_label(prefix: &str, surname: Option<&str>) -> String {
    match (prefix, surname) {
        ("MR." | "MRS." | "MS.", Some(surname)) => surname.to_string(),
        (_, Some(surname)) => format!("{} {}", prefix, surname),
        (_, None) => prefix.to_string(),
    }
}

/// Truncate a body at the first stage direction line; the header line itself never counts
fn cut_stage_direction<'a>(body: &'a str, patterns: &PatternLibrary) -> &'a str {
    match patterns
        .stage_direction
        .find_iter(body)
        .find(|m| m.start() > 0)
    {
        Some(direction) => &body[..direction.start()],
        None => body,
    }
}
