use chrono::NaiveDate;

use crate::patterns::PatternLibrary;

/// Perform Stage 0: strip page boilerplate from extracted transcript text.
///
/// Removes masthead date lines, part separators, standalone page numbers and
/// page numbers glued onto continuation lines, then collapses runs of blank
/// lines and spaces. Applying it twice gives the same result as once; the
/// first line is never treated as a page-number continuation.
pub fn normalize_text(text: &str, patterns: &PatternLibrary) -> String {
    let text = patterns.masthead.replace_all(text, "\n");
    let text = patterns.part_separator.replace_all(&text, "");
    let text = patterns.standalone_page_number.replace_all(&text, "");
    let text = patterns.page_number_prefix.replace_all(&text, "\n${1}");
    let text = patterns.excess_newlines.replace_all(&text, "\n\n");
    let text = patterns.excess_spaces.replace_all(&text, " ");

    text.trim().to_string()
}

/// Find the session date header ("WEDNESDAY, JUNE 11, 2025") near the top of a transcript
pub fn detect_session_date(text: &str, patterns: &PatternLibrary) -> Option<NaiveDate> {
    let caps = patterns.session_date.captures(text)?;
    let header = caps.get(1)?.as_str();
    // The weekday is not checked against the date
    let (_, month_day_year) = header.split_once(',')?;
    let month_day_year = month_day_year.split_whitespace().collect::<Vec<_>>().join(" ");
    NaiveDate::parse_from_str(&month_day_year, "%B %d, %Y").ok()
}
