// src/specs/text.rs
//! Parsing *spec* for the hand-maintained plain-text listing.
//!
//! ```text
//! Mind Reading                      ← title (first line after a blank)
//! "I know what you're thinking."    ← quote
//! Power Set: Telepathy              ← Label: value
//! Cost: 5 Focus
//! Effect: You read the surface      ← effect swallows the rest of the block
//! thoughts of one target.
//! ```
//!
//! A block starts at a non-blank line that follows a blank line and is not
//! itself `Label: value`. Lines that don't look like a label continue the
//! previous field (manual wraps).

use std::error::Error;
use std::fs;
use std::mem::take;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::sanitize::field_to_key;
use crate::power::{PowerRecord, QUOTE, TITLE};

static FIELD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z \-]*):\s*(.*)$").expect("field pattern is valid")
});

const EFFECT: &str = "effect";
const MIN_BLOCK_LINES: usize = 3;

pub fn parse_text_file(path: &Path) -> Result<Vec<PowerRecord>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("File '{}' could not be read: {e}", path.display()))?;
    Ok(parse_text(&text))
}

pub fn parse_text(text: &str) -> Vec<PowerRecord> {
    let blocks = split_blocks(text);
    let mut powers = Vec::with_capacity(blocks.len());
    for block in &blocks {
        match parse_block(block) {
            Some(p) => powers.push(p),
            None => logw!("Text: skipped short block starting '{}'", block.first().map(String::as_str).unwrap_or("")),
        }
    }
    logf!("Text: {} blocks, {} powers", blocks.len(), powers.len());
    powers
}

/// Group non-blank lines into per-power blocks.
fn split_blocks(text: &str) -> Vec<Vec<String>> {
    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut last_was_blank = true;

    for raw in text.lines() {
        let line = raw.trim_end();
        if line.trim().is_empty() {
            last_was_blank = true;
            continue;
        }
        if last_was_blank && !FIELD_LINE.is_match(line) && !current.is_empty() {
            blocks.push(take(&mut current));
        }
        current.push(line.trim().to_string());
        last_was_blank = false;
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn parse_block(lines: &[String]) -> Option<PowerRecord> {
    if lines.len() < MIN_BLOCK_LINES {
        return None;
    }
    let mut power = PowerRecord::new();
    power.insert(TITLE, lines[0].as_str());
    power.insert(QUOTE, lines[1].as_str());

    let mut last_field: Option<String> = None;
    let mut i = MIN_BLOCK_LINES - 1;
    while i < lines.len() {
        let line = &lines[i];
        if let Some(caps) = FIELD_LINE.captures(line) {
            let key = field_to_key(&caps[1]);
            let value = caps[2].trim();
            if key == EFFECT {
                // effect is always last and may wrap without repeating the label
                let mut parts = vec![value];
                parts.extend(lines[i + 1..].iter().map(String::as_str));
                power.insert(key, parts.join(" ").trim());
                break;
            }
            power.insert(key.as_str(), value);
            last_field = Some(key);
        } else if let Some(field) = &last_field {
            if let Some(v) = power.get_mut(field) {
                v.push(' ');
                v.push_str(line);
            }
        }
        i += 1;
    }
    Some(power)
}
