use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{canonicalize_name, SpeakerUtterance};

/// One row of the member roster for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub member_id: u64,
    pub name: String,
    #[serde(default)]
    pub district: Option<u32>,
    #[serde(default)]
    pub session_year: Option<u32>,
}

/// Canonical upper-cased member names mapped to their identifiers.
///
/// Backed by an ordered map so iteration, and therefore name resolution,
/// is reproducible. When two entries collide on the same canonical name the
/// first identifier seen is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberNameIndex {
    names: BTreeMap<String, u64>,
}

impl MemberNameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the per-run index from every utterance that carries a member id
    pub fn from_utterances(utterances: &[SpeakerUtterance]) -> Self {
        let mut index = Self::new();
        for utterance in utterances {
            if let Some(member_id) = utterance.member_id {
                index.insert(&utterance.speaker_name, member_id);
            }
        }
        index
    }

    /// Build an index over a roster
    pub fn from_roster(entries: &[RosterEntry]) -> Self {
        let mut index = Self::new();
        for entry in entries {
            index.insert(&entry.name, entry.member_id);
        }
        index
    }

    /// Insert a name, keeping the existing id if the canonical name is already present
    pub fn insert(&mut self, name: &str, member_id: u64) {
        let canonical = canonicalize_name(name);
        if canonical.is_empty() {
            return;
        }
        match self.names.get(&canonical) {
            Some(&existing) if existing != member_id => {
                debug!(
                    "Name {} maps to both {} and {}, keeping {}",
                    canonical, existing, member_id, existing
                );
            }
            Some(_) => {}
            None => {
                self.names.insert(canonical, member_id);
            }
        }
    }

    pub fn contains(&self, canonical_name: &str) -> bool {
        self.names.contains_key(canonical_name)
    }

    pub fn member_id(&self, canonical_name: &str) -> Option<u64> {
        self.names.get(canonical_name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.names.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The member roster consulted to attach ids to segmented speakers
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub entries: Vec<RosterEntry>,
    index: MemberNameIndex,
}

impl Roster {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        let index = MemberNameIndex::from_roster(&entries);
        Self { entries, index }
    }

    pub fn index(&self) -> &MemberNameIndex {
        &self.index
    }

    /// Look up a roster entry by id
    pub fn get(&self, member_id: u64) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.member_id == member_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(member_id: u64, name: &str) -> RosterEntry {
        RosterEntry {
            member_id,
            name: name.to_string(),
            district: None,
            session_year: None,
        }
    }

    #[test]
    fn test_index_from_utterances_skips_non_members() {
        let utterances = vec![
            SpeakerUtterance::new("ACTING SPEAKER AUBRY", None, "Order.", "2025-06-11", 1),
            SpeakerUtterance::new("Smith", Some(7), "Thank you.", "2025-06-11", 2),
        ];

        let index = MemberNameIndex::from_utterances(&utterances);

        assert_eq!(index.len(), 1);
        assert_eq!(index.member_id("SMITH"), Some(7));
        assert!(!index.contains("ACTING SPEAKER AUBRY"));
    }

    #[test]
    fn test_index_keeps_first_id_on_collision() {
        let index = MemberNameIndex::from_roster(&[entry(3, "Lee"), entry(9, "LEE")]);
        assert_eq!(index.member_id("LEE"), Some(3));
    }

    #[test]
    fn test_roster_lookup() {
        let roster = Roster::new(vec![entry(1, "Adams"), entry(2, "Baker")]);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(2).map(|e| e.name.as_str()), Some("Baker"));
        assert!(roster.index().contains("ADAMS"));
    }
}
