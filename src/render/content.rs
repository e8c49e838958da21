// src/render/content.rs
use crate::config::consts::UNKNOWN_POWER;
use crate::config::layout::FIELD_ORDER;
use crate::power::{PowerRecord, DESCRIPTION, QUOTE};

/// One body field that will be drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldText<'a> {
    pub key: &'static str,
    pub label: &'static str,
    pub value: &'a str,
}

/// What a card shows, pulled out of a record in drawing order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardContent<'a> {
    pub title: &'a str,
    /// The record's quote, or its description when there is no quote.
    pub quote: Option<&'a str>,
    /// Present, non-empty fields in canonical order.
    pub fields: Vec<FieldText<'a>>,
}

impl<'a> CardContent<'a> {
    pub fn from_record(record: &'a PowerRecord) -> Self {
        let title = record.title().filter(|t| !t.trim().is_empty()).unwrap_or(UNKNOWN_POWER);
        let quote = record
            .get_nonempty(QUOTE)
            .or_else(|| record.get_nonempty(DESCRIPTION));
        let fields = FIELD_ORDER
            .iter()
            .filter_map(|&(key, label)| record.get_nonempty(key).map(|value| FieldText { key, label, value }))
            .collect();
        Self { title, quote, fields }
    }
}
