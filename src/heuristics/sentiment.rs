use crate::models::Sentiment;
use crate::patterns::PatternLibrary;

/// Classify an utterance into exactly one sentiment bucket.
///
/// Recognizers are checked in priority order and the first hit wins:
/// amendment offer, then disagreement, then agreement, else neutral.
pub fn classify_sentiment(text: &str, patterns: &PatternLibrary) -> Sentiment {
    if patterns.amendment_offer.is_match(text) {
        Sentiment::AmendmentOffer
    } else if patterns.disagreement.is_match(text) {
        Sentiment::Disagreement
    } else if patterns.agreement.is_match(text) {
        Sentiment::Agreement
    } else {
        Sentiment::Neutral
    }
}
