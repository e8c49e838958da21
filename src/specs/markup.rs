// src/specs/markup.rs
//! Parsing *spec* for HTML / MHTML power listings.
//!
//! Page shape this relies on:
//! - every power starts with `<h3 class="normal">Power Name</h3>`;
//! - the power's details are the `<p>` paragraphs after it, up to the next such heading;
//! - the first `<em>` in those paragraphs is the flavor description;
//! - labels are bold (`<strong>` or `<b>`), e.g. `<strong>Cost:</strong> 5 Focus`.
//!
//! Non-responsibilities: reading files is done by `parse_markup_file`; saving
//! JSON and reporting live in `runner`.

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::core::html::{has_class, text_until_tag, Element, Html};
use crate::core::quoted_printable;
use crate::core::sanitize::field_to_key;
use crate::power::{PowerRecord, DESCRIPTION, TITLE};

const HEADING_TAG: &str = "h3";
const HEADING_CLASS: &str = "normal";
const LABEL_TAGS: &[&str] = &["strong", "b"];

/// Read a saved page and parse it. MHTML (quoted-printable) is decoded first.
pub fn parse_markup_file(path: &Path) -> Result<Vec<PowerRecord>, Box<dyn Error>> {
    let raw = fs::read(path)
        .map_err(|e| format!("File '{}' could not be read: {e}", path.display()))?;
    let raw = String::from_utf8_lossy(&raw);
    let doc = decode_document(&raw);
    Ok(parse_markup(&doc))
}

/// Undo quoted-printable encoding when the document looks like an MHTML body.
pub fn decode_document(raw: &str) -> String {
    if quoted_printable::looks_encoded(raw) {
        logd!("Markup: decoding quoted-printable body ({} bytes)", raw.len());
        quoted_printable::decode_to_string(raw)
    } else {
        raw.to_string()
    }
}

pub fn parse_markup(doc: &str) -> Vec<PowerRecord> {
    let html = Html::new(doc);

    let headings: Vec<Element> = html
        .elements_in(HEADING_TAG, 0, html.len())
        .into_iter()
        .filter(|h| has_class(h.open_tag(doc), HEADING_CLASS))
        .collect();

    let mut powers = Vec::with_capacity(headings.len());
    for (i, heading) in headings.iter().enumerate() {
        let section_end = headings.get(i + 1).map(|next| next.start).unwrap_or(html.len());
        powers.push(parse_section(&html, heading, section_end));
    }
    logf!("Markup: {} power headings", powers.len());
    powers
}

/// One power: heading text plus everything gleaned from the paragraphs before `section_end`.
fn parse_section(html: &Html, heading: &Element, section_end: usize) -> PowerRecord {
    let src = html.src;
    let mut description = s!();
    let mut fields = PowerRecord::new();

    // Every <p> in the byte range counts, nested ones included, not only the
    // heading's siblings.
    for p in html.elements_in("p", heading.end, section_end) {
        let inner_end = p.close_start.min(section_end);

        if description.is_empty() {
            if let Some(em) = html.elements_in("em", p.open_end, inner_end).first() {
                description = em.text(src);
            }
        }

        let full_text = p.text(src);
        for label in labels_in(html, p.open_end, inner_end) {
            let label_text = label.text(src);
            if label_text.is_empty() { continue; }

            let (name, value) = if label_text.contains(':') {
                let name = label_text.trim_end_matches(':');
                let mut value = text_until_tag(src, label.end.min(inner_end));
                if value.is_empty() {
                    value = text_after(&full_text, &label_text);
                }
                (name, value)
            } else {
                (label_text.as_str(), text_after(&full_text, &label_text))
            };

            if value.is_empty() {
                logd!("Markup: '{}' has no value, dropped", name);
                continue;
            }
            fields.insert(field_to_key(name), value);
        }
    }

    let mut power = PowerRecord::with_title(heading.text(src));
    if !description.is_empty() {
        power.insert(DESCRIPTION, description);
    }
    for (k, v) in fields.iter() {
        // a bold "Power:" label must not clobber the heading title
        if k == TITLE { continue; }
        power.insert(k, v);
    }
    power
}

/// Bold label elements inside `[from, to)`, in document order.
fn labels_in(html: &Html, from: usize, to: usize) -> Vec<Element> {
    let mut labels: Vec<Element> = LABEL_TAGS
        .iter()
        .flat_map(|tag| html.elements_in(tag, from, to))
        .collect();
    labels.sort_by_key(|el| el.start);
    labels
}

/// Substring of `full` after the first occurrence of `label`, trimmed.
fn text_after(full: &str, label: &str) -> String {
    match full.find(label) {
        Some(at) => full[at + label.len()..].trim().to_string(),
        None => s!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_em_and_bold_label() {
        let doc = r#"
            <h3 class="normal">Mind Reading</h3>
            <p><em>You hear what others think.</em> <strong>Power Set:</strong> Telepathy</p>
        "#;
        let powers = parse_markup(doc);
        assert_eq!(powers.len(), 1);
        let p = &powers[0];
        assert_eq!(p.get("power"), Some("Mind Reading"));
        assert_eq!(p.get("description"), Some("You hear what others think."));
        assert_eq!(p.get("power_set"), Some("Telepathy"));
    }

    #[test]
    fn fallback_to_paragraph_text_when_sibling_empty() {
        let doc = r#"<h3 class="normal">Blink</h3>
            <p><strong>Cost:</strong><span>5 Focus</span></p>"#;
        let p = &parse_markup(doc)[0];
        assert_eq!(p.get("cost"), Some("5 Focus"));
    }

    #[test]
    fn label_without_colon_uses_rest_of_paragraph() {
        let doc = r#"<h3 class="normal">Blink</h3><p><b>Power Set</b> Teleportation</p>"#;
        let p = &parse_markup(doc)[0];
        assert_eq!(p.get("power_set"), Some("Teleportation"));
    }

    #[test]
    fn empty_values_dropped_and_sections_split() {
        let doc = r#"
            <h3 class="normal">One</h3>
            <p><strong>Range:</strong></p>
            <h3 class="other">Not a power</h3>
            <p><strong>Action:</strong> Standard</p>
            <h3 class="normal">Two</h3>
            <p><strong>Cost:</strong> 1</p>
        "#;
        let powers = parse_markup(doc);
        assert_eq!(powers.len(), 2);
        assert!(!powers[0].contains("range"));
        assert_eq!(powers[0].get("action"), Some("Standard"));
        assert_eq!(powers[1].get("cost"), Some("1"));
        assert!(!powers[1].contains("action"));
    }

    #[test]
    fn only_first_em_is_description() {
        let doc = r#"<h3 class="normal">X</h3><p><em>first</em></p><p><em>second</em></p>"#;
        let p = &parse_markup(doc)[0];
        assert_eq!(p.get("description"), Some("first"));
    }

    #[test]
    fn nested_paragraphs_count() {
        let doc = r#"<h3 class="normal">Blink</h3>
            <div class="box"><p><strong>Range:</strong> 10 spaces</p></div>"#;
        let p = &parse_markup(doc)[0];
        assert_eq!(p.get("range"), Some("10 spaces"));
    }

    #[test]
    fn mhtml_body_is_decoded() {
        let raw = "<h3 class=3D\"normal\">Tele=\npathy</h3><p><strong>Cost:</strong> 2</p>";
        let powers = parse_markup(&decode_document(raw));
        assert_eq!(powers[0].get("power"), Some("Telepathy"));
        assert_eq!(powers[0].get("cost"), Some("2"));
    }
}
