use regex::Regex;

use crate::models::{BillContext, ProceduralMarkers};
use crate::patterns::PatternLibrary;

/// Scan one utterance for bill, calendar, rules report and amendment numbers.
///
/// Each field is the first match of its recognizer; most utterances match none.
pub fn extract_bill_context(text: &str, patterns: &PatternLibrary) -> BillContext {
    BillContext {
        bill_number: first_capture(&patterns.bill_number, text),
        calendar_number: first_capture(&patterns.calendar_number, text),
        rules_report_number: first_capture(&patterns.rules_report, text),
        amendment_number: first_capture(&patterns.amendment_number, text),
    }
}

/// Count question marks and flag motions and committee calls
pub fn extract_procedural_markers(text: &str, patterns: &PatternLibrary) -> ProceduralMarkers {
    ProceduralMarkers {
        questions: patterns.question_mark.find_iter(text).count(),
        motion: patterns.motion.is_match(text),
        committee_call: patterns.call_committee.is_match(text),
    }
}

fn first_capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_bill_context() {
        let patterns = PatternLibrary::new().unwrap();
        let text = "Rules Report No. 412, Calendar No. 1080, Assembly No. A07321-B, by Mr. Smith.";

        let context = extract_bill_context(text, &patterns);

        assert_eq!(context.bill_number.as_deref(), Some("A07321-B"));
        assert_eq!(context.calendar_number.as_deref(), Some("1080"));
        assert_eq!(context.rules_report_number.as_deref(), Some("412"));
        assert!(context.amendment_number.is_none());
    }

    #[test]
    fn test_partial_and_empty() {
        let patterns = PatternLibrary::new().unwrap();

        let senate = extract_bill_context("Senate No. S01234 is before us.", &patterns);
        assert_eq!(senate.bill_number.as_deref(), Some("S01234"));
        assert!(senate.calendar_number.is_none());

        let amendment = extract_bill_context("On amendment number 3, read the last section.", &patterns);
        assert_eq!(amendment.amendment_number.as_deref(), Some("3"));

        assert!(extract_bill_context("Thank you, Mr. Speaker.", &patterns).is_empty());
    }

    #[test]
    fn test_procedural_markers() {
        let patterns = PatternLibrary::new().unwrap();

        let markers = extract_procedural_markers(
            "I move to call the Rules Committee. Why? Is that right?",
            &patterns,
        );

        assert_eq!(markers.questions, 2);
        assert!(markers.motion);
        assert!(markers.committee_call);

        let quiet = extract_procedural_markers("We removed the clause.", &patterns);
        assert_eq!(quiet, ProceduralMarkers::default());
    }
}
