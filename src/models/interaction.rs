use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of directed interaction between two members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    /// A yield request ("Will Mr. X yield?")
    Question,
    /// An honorific + surname mention
    Address,
    /// A thank-you to a named member
    Response,
}

impl InteractionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionType::Question => "question",
            InteractionType::Address => "address",
            InteractionType::Response => "response",
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse stance label attached to an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Agreement,
    Disagreement,
    AmendmentOffer,
    #[default]
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Agreement => "agreement",
            Sentiment::Disagreement => "disagreement",
            Sentiment::AmendmentOffer => "amendment_offer",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed edge between two members derived from one utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub from_member_id: u64,
    pub from_member_name: String,
    pub to_member_id: u64,
    pub to_member_name: String,
    pub interaction_type: InteractionType,
    pub sentiment: Sentiment,
    /// Exact span that triggered detection
    pub text_snippet: String,
    pub date: String,
    pub sequence: u32,
}

impl InteractionRecord {
    /// Join key identifying the member pair within one utterance
    pub fn pair_key(&self) -> (u64, u64, u32) {
        (self.from_member_id, self.to_member_id, self.sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_labels() {
        assert_eq!(
            serde_json::to_string(&Sentiment::AmendmentOffer).unwrap(),
            "\"amendment_offer\""
        );
        assert_eq!(
            serde_json::to_string(&InteractionType::Response).unwrap(),
            "\"response\""
        );
        assert_eq!(Sentiment::default(), Sentiment::Neutral);
    }
}
