use crate::models::SpeakerUtterance;
use crate::patterns::is_presiding_role;

use super::ResolvedMember;

/// Default number of prior utterances inspected when resolving "the sponsor"
pub const DEFAULT_SPONSOR_LOOKBACK: usize = 5;

/// Resolve "the sponsor" to the nearest prior member speaker.
///
/// Scans backward from `current_index - 1` down to `current_index - lookback`
/// (clamped at 0), skipping non-members and presiding roles. The utterances
/// must already be in sequence order.
pub fn find_sponsor(
    utterances: &[SpeakerUtterance],
    current_index: usize,
    lookback: usize,
) -> Option<ResolvedMember> {
    let lower = current_index.saturating_sub(lookback);

    utterances
        .get(lower..current_index)?
        .iter()
        .rev()
        .find_map(|utterance| {
            let name = utterance.canonical_name();
            match utterance.member_id {
                Some(member_id) if !is_presiding_role(&name) => {
                    Some(ResolvedMember { name, member_id })
                }
                _ => None,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utt(name: &str, member_id: Option<u64>, sequence: u32) -> SpeakerUtterance {
        SpeakerUtterance::new(name, member_id, "...", "2025-06-11", sequence)
    }

    #[test]
    fn test_nearest_member_wins() {
        let utterances = vec![
            utt("ADAMS", Some(1), 1),
            utt("CARTER", Some(3), 2),
            utt("ACTING SPEAKER AUBRY", None, 3),
            utt("BAKER", Some(2), 4),
        ];

        let sponsor = find_sponsor(&utterances, 3, DEFAULT_SPONSOR_LOOKBACK).unwrap();
        assert_eq!(sponsor.name, "CARTER");
        assert_eq!(sponsor.member_id, 3);
    }

    #[test]
    fn test_first_utterance_is_reachable() {
        let utterances = vec![utt("ADAMS", Some(1), 1), utt("BAKER", Some(2), 2)];
        let sponsor = find_sponsor(&utterances, 1, DEFAULT_SPONSOR_LOOKBACK).unwrap();
        assert_eq!(sponsor.member_id, 1);
    }

    #[test]
    fn test_lookback_is_bounded() {
        let mut utterances = vec![utt("ADAMS", Some(1), 1)];
        for seq in 2..=7 {
            utterances.push(utt("THE CLERK", None, seq));
        }
        utterances.push(utt("BAKER", Some(2), 8));

        assert!(find_sponsor(&utterances, 7, DEFAULT_SPONSOR_LOOKBACK).is_none());
    }

    #[test]
    fn test_presiding_role_with_id_skipped() {
        let utterances = vec![
            utt("ADAMS", Some(1), 1),
            utt("ACTING SPEAKER HUNTER", Some(50), 2),
            utt("BAKER", Some(2), 3),
        ];
        let sponsor = find_sponsor(&utterances, 2, DEFAULT_SPONSOR_LOOKBACK).unwrap();
        assert_eq!(sponsor.member_id, 1);
    }

    #[test]
    fn test_no_prior_utterances() {
        let utterances = vec![utt("BAKER", Some(2), 1)];
        assert!(find_sponsor(&utterances, 0, DEFAULT_SPONSOR_LOOKBACK).is_none());
        assert!(find_sponsor(&utterances, 5, DEFAULT_SPONSOR_LOOKBACK).is_none());
    }
}
