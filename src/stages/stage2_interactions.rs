use tracing::debug;

use crate::error::ExtractionError;
use crate::heuristics::{classify_sentiment, find_sponsor, resolve_member, ExtractionConfig, ResolvedMember};
use crate::models::{
    canonicalize_name, InteractionRecord, InteractionType, MemberNameIndex, Sentiment,
    SpeakerUtterance,
};
use crate::patterns::{is_presiding_role, PatternLibrary};

/// Everything a detector needs to inspect one utterance
pub struct DetectionContext<'a> {
    pub utterances: &'a [SpeakerUtterance],
    pub position: usize,
    pub speaker: ResolvedMember,
    pub sentiment: Sentiment,
    pub index: &'a MemberNameIndex,
    pub patterns: &'a PatternLibrary,
    pub config: &'a ExtractionConfig,
}

impl<'a> DetectionContext<'a> {
    pub fn utterance(&self) -> &'a SpeakerUtterance {
        &self.utterances[self.position]
    }

    /// Build a record towards `target` unless it is unknown or the speaker themself
    fn record(
        &self,
        interaction_type: InteractionType,
        target: ResolvedMember,
        snippet: &str,
    ) -> Option<InteractionRecord> {
        if target.member_id == self.speaker.member_id || !self.index.contains(&target.name) {
            return None;
        }
        let utterance = self.utterance();
        Some(InteractionRecord {
            from_member_id: self.speaker.member_id,
            from_member_name: self.speaker.name.clone(),
            to_member_id: target.member_id,
            to_member_name: target.name,
            interaction_type,
            sentiment: self.sentiment,
            text_snippet: snippet.to_string(),
            date: utterance.date.clone(),
            sequence: utterance.sequence,
        })
    }
}

/// A detector inspects one utterance and proposes at most one record
pub type Detector = fn(&DetectionContext<'_>) -> Option<InteractionRecord>;

/// Detectors in the order they run; earlier records win deduplication
pub const DETECTORS: [Detector; 3] = [detect_yield_question, detect_direct_address, detect_thank_response];

/// Perform Stage 2: derive member-to-member interactions for one date.
///
/// The utterances must belong to a single date and be in strictly increasing
/// sequence order, since sponsor resolution looks backward through the list.
/// Presiding roles and speakers without a member id never originate records.
pub fn extract_interactions(
    utterances: &[SpeakerUtterance],
    patterns: &PatternLibrary,
    config: &ExtractionConfig,
) -> Result<Vec<InteractionRecord>, ExtractionError> {
    validate_order(utterances)?;

    let index = MemberNameIndex::from_utterances(utterances);
    let mut interactions = Vec::new();

    for (position, utterance) in utterances.iter().enumerate() {
        let name = utterance.canonical_name();
        let Some(member_id) = utterance.member_id else {
            continue;
        };
        if is_presiding_role(&name) {
            continue;
        }

        let context = DetectionContext {
            utterances,
            position,
            speaker: ResolvedMember { name, member_id },
            sentiment: classify_sentiment(&utterance.text, patterns),
            index: &index,
            patterns,
            config,
        };

        let candidates: Vec<InteractionRecord> = DETECTORS
            .iter()
            .filter_map(|detect| detect(&context))
            .collect();

        interactions.extend(dedup_candidates(candidates));
    }

    debug!(
        "Extracted {} interactions from {} utterances",
        interactions.len(),
        utterances.len()
    );

    Ok(interactions)
}

/// Reject lists that mix dates or are not strictly increasing by sequence
pub fn validate_order(utterances: &[SpeakerUtterance]) -> Result<(), ExtractionError> {
    for pair in utterances.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if current.date != previous.date {
            return Err(ExtractionError::MixedDates {
                expected: previous.date.clone(),
                found: current.date.clone(),
            });
        }
        if current.sequence <= previous.sequence {
            return Err(ExtractionError::UnsortedSequence {
                date: current.date.clone(),
                previous: previous.sequence,
                found: current.sequence,
            });
        }
    }
    Ok(())
}

/// "Will Mr. X yield" or "Will the sponsor yield"
pub fn detect_yield_question(context: &DetectionContext<'_>) -> Option<InteractionRecord> {
    let caps = context
        .patterns
        .yield_question
        .captures(&context.utterance().text)?;

    let target = match caps.get(1) {
        Some(surname) => resolve_member(surname.as_str(), context.index),
        None => find_sponsor(
            context.utterances,
            context.position,
            context.config.sponsor_lookback,
        ),
    }?;

    context.record(InteractionType::Question, target, caps.get(0)?.as_str())
}

/// First honorific + surname mention naming another known member.
///
/// Mentions that resolve to nobody ("Mr. Speaker") or to the speaker are
/// skipped; once one mention is recorded the rest of the utterance is ignored.
pub fn detect_direct_address(context: &DetectionContext<'_>) -> Option<InteractionRecord> {
    context
        .patterns
        .direct_address
        .captures_iter(&context.utterance().text)
        .find_map(|caps| {
            let target = resolve_addressee(caps.get(1)?.as_str(), context)?;
            context.record(InteractionType::Address, target, caps.get(0)?.as_str())
        })
}

/// "Thank you, Mr. X"
pub fn detect_thank_response(context: &DetectionContext<'_>) -> Option<InteractionRecord> {
    let caps = context
        .patterns
        .thank_response
        .captures(&context.utterance().text)?;
    let target = resolve_addressee(caps.get(1)?.as_str(), context)?;

    context.record(InteractionType::Response, target, caps.get(0)?.as_str())
}

/// Resolve "Mr.\nSmith" style captures: collapse whitespace, drop the honorific
fn resolve_addressee(captured: &str, context: &DetectionContext<'_>) -> Option<ResolvedMember> {
    let normalized = canonicalize_name(captured);
    let surname = context.patterns.honorific.replace(&normalized, "");
    resolve_member(&surname, context.index)
}

/// Apply the cross-detector policy to one utterance's candidates, in detector order.
///
/// An address or response is dropped when an address or response already
/// targets the same member from the same utterance. An address also yields to
/// a question, but a response does not.
pub fn dedup_candidates(candidates: Vec<InteractionRecord>) -> Vec<InteractionRecord> {
    let mut kept: Vec<InteractionRecord> = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let duplicate = kept.iter().any(|existing| {
            existing.pair_key() == candidate.pair_key()
                && collides(existing.interaction_type, candidate.interaction_type)
        });
        if duplicate {
            debug!(
                "Dropping {} {} -> {} at {}: already recorded",
                candidate.interaction_type,
                candidate.from_member_name,
                candidate.to_member_name,
                candidate.sequence
            );
        } else {
            kept.push(candidate);
        }
    }

    kept
}

fn collides(existing: InteractionType, candidate: InteractionType) -> bool {
    match candidate {
        InteractionType::Question => existing == InteractionType::Question,
        InteractionType::Address => matches!(
            existing,
            InteractionType::Question | InteractionType::Address
        ),
        InteractionType::Response => matches!(
            existing,
            InteractionType::Address | InteractionType::Response
        ),
    }
}
