// src/underline.rs
//! Separator rules between card fields.
//!
//! Reads a rendered card, finds the labels of the underline-eligible fields and
//! the value lines under them, and draws a thin rule below each field's value
//! block except the last one. Cards from the current renderer are matched by
//! their `data-field`/`data-role` attributes; older cards without them are
//! matched by label text at the label column and value lines at the value column.

use std::error::Error;
use std::path::Path;
use std::sync::LazyLock;

use quick_xml::events::{BytesStart, Event as XmlEvent};
use quick_xml::Reader;
use regex::Regex;

use crate::config::layout::{field_key_for_label, CardLayout, UNDERLINE_FIELDS};

pub const RULE_CLASS: &str = "field-rule";

static OLD_RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*<line\b[^>]*\bclass="field-rule"[^>]*/>[ \t]*\r?\n?"#)
        .expect("valid rule pattern")
});

#[derive(Clone, Debug, PartialEq)]
pub enum TextKind {
    /// Field label, with the record key it names.
    Label(String),
    Value,
    Other,
}

/// One `<text>` element, in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct TextItem {
    pub kind: TextKind,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub text: String,
}

#[derive(Default)]
struct OpenText {
    x: Option<f32>,
    y: Option<f32>,
    role: Option<String>,
    field: Option<String>,
    text: String,
}

fn read_open_text(e: &BytesStart, reader: &Reader<&[u8]>) -> Result<OpenText, Box<dyn Error>> {
    let mut t = OpenText::default();
    for attr in e.attributes().flatten() {
        let value = attr.decode_and_unescape_value(reader.decoder())?;
        match attr.key.as_ref() {
            b"x" => t.x = value.trim().parse().ok(),
            b"y" => t.y = value.trim().parse().ok(),
            b"data-role" => t.role = Some(value.into_owned()),
            b"data-field" => t.field = Some(value.into_owned()),
            _ => {}
        }
    }
    Ok(t)
}

fn group_field(e: &BytesStart, reader: &Reader<&[u8]>) -> Result<Option<String>, Box<dyn Error>> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"data-field" {
            return Ok(Some(attr.decode_and_unescape_value(reader.decoder())?.into_owned()));
        }
    }
    Ok(None)
}

fn classify(t: OpenText, group: Option<&str>, layout: &CardLayout) -> TextItem {
    let text = t.text.trim().to_string();
    let field = t.field.as_deref().or(group);

    let kind = match (t.role.as_deref(), field) {
        (Some("label"), Some(key)) => TextKind::Label(key.to_string()),
        (Some("value"), _) => TextKind::Value,
        (Some(_), _) => TextKind::Other,
        (None, _) if t.x == Some(layout.label_x()) => {
            match field_key_for_label(text.trim_end_matches(':')) {
                Some(key) => TextKind::Label(key.to_string()),
                None => TextKind::Other,
            }
        }
        (None, _) if t.x == Some(layout.value_x()) => TextKind::Value,
        _ => TextKind::Other,
    };
    TextItem { kind, x: t.x, y: t.y, text }
}

/// Every `<text>` in `svg`, classified as label, value line or other.
pub fn scan_fields(svg: &str, layout: &CardLayout) -> Result<Vec<TextItem>, Box<dyn Error>> {
    let mut reader = Reader::from_str(svg);
    let mut groups: Vec<Option<String>> = Vec::new();
    let mut open: Option<OpenText> = None;
    let mut items = Vec::new();

    loop {
        match reader.read_event()? {
            XmlEvent::Start(e) if e.name().as_ref() == b"g" => {
                groups.push(group_field(&e, &reader)?);
            }
            XmlEvent::End(e) if e.name().as_ref() == b"g" => {
                groups.pop();
            }
            XmlEvent::Start(e) if e.name().as_ref() == b"text" => {
                open = Some(read_open_text(&e, &reader)?);
            }
            XmlEvent::Text(t) => {
                if let Some(o) = open.as_mut() {
                    o.text.push_str(&t.unescape()?);
                }
            }
            XmlEvent::CData(t) => {
                if let Some(o) = open.as_mut() {
                    o.text.push_str(&String::from_utf8_lossy(&t));
                }
            }
            XmlEvent::End(e) if e.name().as_ref() == b"text" => {
                if let Some(o) = open.take() {
                    let group = groups.iter().rev().find_map(|g| g.as_deref());
                    items.push(classify(o, group, layout));
                }
            }
            XmlEvent::Eof => break,
            _ => {}
        }
    }
    Ok(items)
}

fn eligible_labels(items: &[TextItem]) -> Vec<(usize, f32)> {
    items
        .iter()
        .enumerate()
        .filter_map(|(i, t)| match (&t.kind, t.y) {
            (TextKind::Label(key), Some(y)) if UNDERLINE_FIELDS.contains(&key.as_str()) => Some((i, y)),
            _ => None,
        })
        .collect()
}

/// Rule y-positions: one below each eligible field's value block, skipping
/// the last eligible field on the card.
pub fn plan_rules(items: &[TextItem], layout: &CardLayout) -> Vec<f32> {
    eligible_labels(items)
        .windows(2)
        .map(|pair| {
            let ((start, label_y), (end, _)) = (pair[0], pair[1]);
            items[start + 1..end]
                .iter()
                .filter(|t| t.kind == TextKind::Value)
                .filter_map(|t| t.y)
                .reduce(f32::max)
                .map(|y| y + layout.rule_offset)
                .unwrap_or(label_y + layout.rule_fallback_offset)
        })
        .collect()
}

/// Remove rules added by an earlier run.
pub fn strip_rules(svg: &str) -> String {
    OLD_RULE.replace_all(svg, "").into_owned()
}

/// `svg` with fresh separator rules placed just before the closing `</svg>`.
pub fn add_field_rules(svg: &str, layout: &CardLayout) -> Result<String, Box<dyn Error>> {
    let clean = strip_rules(svg);
    let items = scan_fields(&clean, layout)?;
    let rules = plan_rules(&items, layout);

    let close = clean.rfind("</svg>").ok_or("Missing closing </svg> tag")?;
    let (x1, x2) = (layout.label_x(), layout.width - layout.label_x());

    let mut out = String::with_capacity(clean.len() + rules.len() * 128);
    out.push_str(&clean[..close]);
    for y in &rules {
        wln!(
            out,
            r#"<line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="{}" stroke-width="{}" class="{RULE_CLASS}"/>"#,
            layout.rule_color,
            layout.rule_width
        );
    }
    out.push_str(&clean[close..]);
    Ok(out)
}

/// Rewrite the card at `path` with separator rules. Returns how many were drawn.
pub fn add_field_rules_in_place(path: &Path, layout: &CardLayout) -> Result<usize, Box<dyn Error>> {
    let svg = std::fs::read_to_string(path)
        .map_err(|e| format!("File '{}' could not be read: {e}", path.display()))?;
    let updated = add_field_rules(&svg, layout).map_err(|e| format!("{}: {e}", path.display()))?;
    let drawn = updated.matches(RULE_CLASS).count();
    std::fs::write(path, updated)?;
    Ok(drawn)
}

/// Sorted y-positions of the eligible labels and the gaps between neighbours.
pub fn label_distances(svg: &str, layout: &CardLayout) -> Result<(Vec<f32>, Vec<f32>), Box<dyn Error>> {
    let items = scan_fields(svg, layout)?;
    let mut ys: Vec<f32> = eligible_labels(&items).into_iter().map(|(_, y)| y).collect();
    ys.sort_by(f32::total_cmp);
    let gaps = ys.windows(2).map(|w| w[1] - w[0]).collect();
    Ok((ys, gaps))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<svg xmlns="http://www.w3.org/2000/svg" width="750" height="1080">
<text x="375" y="77">BLINK</text>
<text x="45" y="180">Power Set:</text>
<text x="255" y="180">Warp</text>
<text x="45" y="206">Range:</text>
<text x="255" y="206">Line of sight</text>
<text x="255" y="235">and beyond</text>
<text x="45" y="261">Cost:</text>
<text x="45" y="300">Effect:</text>
<text x="255" y="300">Teleport.</text>
</svg>
"#;

    #[test]
    fn legacy_cards_match_by_position() {
        let l = CardLayout::default();
        let items = scan_fields(LEGACY, &l).unwrap();
        let labels: Vec<&TextKind> = items.iter().map(|t| &t.kind).filter(|k| matches!(k, TextKind::Label(_))).collect();
        assert_eq!(labels.len(), 4);
        // Power Set's block runs to Cost and takes Range's lines with it.
        assert_eq!(plan_rules(&items, &l), vec![239.0, 293.0]);
    }

    #[test]
    fn rules_inserted_before_close_and_idempotent() {
        let l = CardLayout::default();
        let once = add_field_rules(LEGACY, &l).unwrap();
        assert_eq!(once.matches(r#"class="field-rule""#).count(), 2);
        assert!(once.contains(r##"<line x1="45" y1="239" x2="705" y2="239" stroke="#e0e0e0" stroke-width="2" class="field-rule"/>"##));
        assert!(once.trim_end().ends_with("</svg>"));

        let twice = add_field_rules(&once, &l).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn attribute_tagged_cards_ignore_coordinates() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
<g class="field" data-field="action"><text data-role="label" x="10" y="100">Action:</text><text data-role="value" x="99" y="100">Standard</text><text data-role="value" x="99" y="130">and more</text></g>
<g class="field" data-field="cost"><text data-role="label" x="10" y="160">Cost:</text></g>
</svg>"#;
        let l = CardLayout::default();
        let items = scan_fields(svg, &l).unwrap();
        assert_eq!(items[0].kind, TextKind::Label(s!("action")));
        assert_eq!(plan_rules(&items, &l), vec![134.0]);
    }

    #[test]
    fn single_label_gets_no_rule() {
        let svg = r#"<svg><text x="45" y="180">Effect:</text><text x="255" y="180">X</text></svg>"#;
        assert!(plan_rules(&scan_fields(svg, &CardLayout::default()).unwrap(), &CardLayout::default()).is_empty());
    }

    #[test]
    fn distances_between_labels() {
        let (ys, gaps) = label_distances(LEGACY, &CardLayout::default()).unwrap();
        assert_eq!(ys, vec![180.0, 261.0, 300.0]);
        assert_eq!(gaps, vec![81.0, 39.0]);
    }

    #[test]
    fn missing_root_close_is_an_error() {
        assert!(add_field_rules("<svg><text x=\"45\" y=\"1\">Cost:</text>", &CardLayout::default()).is_err());
    }
}
