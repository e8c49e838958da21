// src/specs/mod.rs
//! # Parsing “specs”
//!
//! One module per input format. Each spec encodes *where the fields live* in
//! that format and how to pull them out tolerantly; all of them produce the
//! same shape, an ordered `Vec<PowerRecord>`.
//!
//! ## What lives here
//! - `markup`: HTML / MHTML exports of the power list page.
//! - `text`: the plain-text listing maintained by hand.
//! - `summary`: the human-readable overview printed after a parse.
//!
//! ## What does **not** live here
//! - JSON persistence (`file`), CLI flags (`cli`), progress output (`runner`).
//!
//! ## Conventions
//! - Field keys are snake-cased labels (`"Power Set"` → `power_set`).
//! - The title is always stored under `power`.
//! - Fields without a value are dropped, never stored empty.
//! - Specs are testable offline on inline fixtures.
pub mod markup;
pub mod summary;
pub mod text;

use std::error::Error;
use std::path::Path;

use crate::config::options::ParseMode;
use crate::power::PowerRecord;

/// Parse `path` with the spec for `mode`.
pub fn parse_file(mode: ParseMode, path: &Path) -> Result<Vec<PowerRecord>, Box<dyn Error>> {
    match mode {
        ParseMode::Markup => markup::parse_markup_file(path),
        ParseMode::Text => text::parse_text_file(path),
    }
}
