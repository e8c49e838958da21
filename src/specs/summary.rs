// src/specs/summary.rs
use std::collections::BTreeMap;

use crate::config::consts::{DESCRIPTION_PREVIEW_CHARS, SUMMARY_PREVIEW};
use crate::power::{PowerRecord, DESCRIPTION, TITLE};

fn is_detail_field(key: &str) -> bool {
    key != TITLE && key != DESCRIPTION
}

/// How many records carry each detail field, sorted by key.
pub fn field_counts(powers: &[PowerRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for p in powers {
        for key in p.keys().filter(|k| is_detail_field(k)) {
            *counts.entry(key.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Multi-line overview: total, the first few records, and field frequencies.
pub fn summarize(powers: &[PowerRecord]) -> String {
    let mut out = String::new();
    wln!(out, "Parsed {} powers:", powers.len());

    for (i, p) in powers.iter().take(SUMMARY_PREVIEW).enumerate() {
        wln!(out, "");
        wln!(out, "{}. {}", i + 1, p.title().unwrap_or("?"));
        if let Some(desc) = p.get(DESCRIPTION) {
            let preview: String = desc.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
            wln!(out, "   Description: {preview}...");
        }
        let names: Vec<&str> = p.keys().filter(|k| is_detail_field(k)).collect();
        if !names.is_empty() {
            wln!(out, "   Fields: {}", names.join(", "));
        }
    }

    let counts = field_counts(powers);
    wln!(out, "");
    wln!(out, "Found {} unique field types:", counts.len());
    for (field, n) in &counts {
        wln!(out, "   {field}: {n} powers");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_skip_title_and_description() {
        let powers: Vec<PowerRecord> = vec![
            [("power", "A"), ("description", "d"), ("cost", "1")].into_iter().collect(),
            [("power", "B"), ("cost", "2"), ("range", "3")].into_iter().collect(),
        ];
        let counts = field_counts(&powers);
        assert_eq!(counts.get("cost"), Some(&2));
        assert_eq!(counts.get("range"), Some(&1));
        assert!(!counts.contains_key("power"));
        assert!(!counts.contains_key("description"));

        let text = summarize(&powers);
        assert!(text.starts_with("Parsed 2 powers:"));
        assert!(text.contains("   Fields: cost, range"));
        assert!(text.contains("Found 2 unique field types:"));
    }
}
