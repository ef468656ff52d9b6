use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::{Roster, RosterEntry};

/// Parse a roster JSON file (an array of member entries)
pub fn load_roster(path: &Path) -> Result<Roster> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_roster_json(&content)
}

/// Parse a roster JSON string
pub fn parse_roster_json(json: &str) -> Result<Roster> {
    let entries: Vec<RosterEntry> =
        serde_json::from_str(json).context("Failed to parse roster JSON")?;
    Ok(Roster::new(entries))
}

/// Read the parts of one transcript date and join them in order.
///
/// Multi-part transcripts are separated by `--- PART n ---` lines, which the
/// normalizer strips again.
pub fn read_transcript_parts(paths: &[PathBuf]) -> Result<String> {
    let mut combined = String::new();

    for (number, path) in paths.iter().enumerate() {
        let part = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {:?}", path))?;
        if paths.len() > 1 {
            combined.push_str(&format!("\n\n--- PART {} ---\n\n", number + 1));
        }
        combined.push_str(&part);
        combined.push('\n');
    }

    Ok(combined)
}

/// Derive a date key from a transcript file name.
///
/// Leading dashes and part suffixes ("-Part-2", "-&-Part-1") are dropped so
/// every part of one session maps to the same key.
pub fn date_key_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    clean_date_key(&stem)
}

fn clean_date_key(raw: &str) -> String {
    let trimmed = raw.trim_matches('-');
    let lower = trimmed.to_ascii_lowercase();
    let cut = ["-&", "--part-", "-part-"]
        .iter()
        .filter_map(|marker| lower.find(marker))
        .min()
        .unwrap_or(trimmed.len());
    trimmed[..cut].to_string()
}

/// Group input files by date key; parts within a date are sorted by file name
pub fn group_by_date(paths: &[PathBuf]) -> BTreeMap<String, Vec<PathBuf>> {
    let mut groups: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for path in paths {
        groups
            .entry(date_key_from_path(path))
            .or_default()
            .push(path.clone());
    }
    for parts in groups.values_mut() {
        parts.sort();
    }
    groups
}
