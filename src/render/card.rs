// src/render/card.rs
use std::collections::HashMap;
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::config::consts::CARD_EXT;
use crate::config::layout::CardLayout;
use crate::core::sanitize::sanitize_filename;
use crate::file::{ensure_directory, resolve_card_path};
use crate::power::PowerRecord;

use super::content::{CardContent, FieldText};
use super::decor;
use super::fit::{fit_body, fit_header, BodyFit, HeaderFit};
use super::metrics::TextMetrics;
use super::wrap::wrap_to_width;

const WHITE: &str = "#fff";
const INK: &str = "#222";
const LABEL_INK: &str = "#223355";
const ELLIPSIS: &str = "...";

/// Escape text for use inside SVG element content or a quoted attribute.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Keep at most `max` lines; the last kept line gets an ellipsis.
fn truncate_lines(mut lines: Vec<String>, max: usize) -> Vec<String> {
    if max > 0 && lines.len() > max {
        lines.truncate(max);
        if let Some(last) = lines.last_mut() {
            last.push_str(ELLIPSIS);
        }
    }
    lines
}

fn header(out: &mut String, fit: &HeaderFit, l: &CardLayout) {
    let mid = l.header_height / 2.0 + 10.0;
    let f = fit.font_size;
    let ys: Vec<f32> = match fit.lines.len() {
        1 => vec![mid],
        _ => vec![mid - f / 2.0, mid + f / 2.0],
    };
    for (line, y) in fit.lines.iter().zip(ys) {
        wln!(
            out,
            r#"<text class="title" x="{}" y="{y}" text-anchor="middle" alignment-baseline="middle" font-size="{f}" font-family="{}" fill="{WHITE}" font-weight="bold" letter-spacing="{}">{}</text>"#,
            l.center_x(),
            l.font_family,
            l.header_letter_spacing,
            escape_xml(line)
        );
    }
}

/// Centered italic quote block. Returns the cursor below it.
fn quote(out: &mut String, text: &str, fit: &BodyFit, truncate: bool, l: &CardLayout, m: &dyn TextMetrics, mut y: f32) -> f32 {
    let mut lines = wrap_to_width(text, fit.quote_font, l.quote_width(), m);
    if truncate {
        lines = truncate_lines(lines, l.max_quote_lines);
    }
    for line in &lines {
        wln!(
            out,
            r#"<text class="quote" x="{}" y="{y}" text-anchor="middle" font-size="{}" font-family="{}" fill="{INK}" font-style="italic" style="font-style:italic;">{}</text>"#,
            l.center_x(),
            fit.quote_font,
            l.font_family,
            escape_xml(line)
        );
        y += fit.quote_font + 6.0;
    }
    y + 12.0
}

/// One labelled field group. Returns the cursor for the next field.
fn field(out: &mut String, field: &FieldText, fit: &BodyFit, truncate: bool, l: &CardLayout, m: &dyn TextMetrics, y: f32) -> f32 {
    wln!(out, r#"<g class="field" data-field="{}">"#, field.key);
    wln!(
        out,
        r#"<text data-role="label" x="{}" y="{y}" font-size="{}" font-family="{}" fill="{LABEL_INK}" font-weight="bold">{}:</text>"#,
        l.label_x(),
        fit.label_font,
        l.font_family,
        escape_xml(field.label)
    );

    let mut lines = wrap_to_width(field.value, fit.value_font, l.value_width(), m);
    if truncate {
        lines = truncate_lines(lines, l.max_value_lines);
    }
    let mut value_y = y;
    for line in &lines {
        wln!(
            out,
            r#"<text data-role="value" x="{}" y="{value_y}" font-size="{}" font-family="{}" fill="{INK}">{}</text>"#,
            l.value_x(),
            fit.value_font,
            l.font_family,
            escape_xml(line)
        );
        value_y += fit.value_font + 3.0;
    }
    wln!(out, "</g>");

    // last baseline, then one value line of air
    value_y - 3.0 + fit.value_font
}

/// Render one record as a complete SVG document.
pub fn render_card(record: &PowerRecord, layout: &CardLayout, metrics: &dyn TextMetrics) -> String {
    let content = CardContent::from_record(record);
    let head = fit_header(content.title, layout, metrics);
    let body = fit_body(&content, layout, metrics);
    let truncate = body.truncates(layout);
    logd!(
        "Render: '{}' header {}pt x{} body {}/{}/{}",
        content.title,
        head.font_size,
        head.lines.len(),
        body.label_font,
        body.value_font,
        body.quote_font
    );

    let (w, h) = (layout.width, layout.height);
    let mut out = String::with_capacity(16 * 1024);
    wln!(out, r#"<?xml version="1.0" encoding="utf-8" ?>"#);
    wln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    decor::defs(&mut out);
    decor::background(&mut out, layout);
    header(&mut out, &head, layout);

    let mut y = layout.header_height + layout.padding;
    if let Some(text) = content.quote {
        y = quote(&mut out, text, &body, truncate, layout, metrics, y);
    }
    for f in &content.fields {
        y = field(&mut out, f, &body, truncate, layout, metrics, y);
    }

    decor::footer(&mut out, layout);
    wln!(out, "</svg>");
    out
}

/// Render `record` into `<out_dir>/<stem>.svg`. `seen` tracks stems already
/// written in this batch so repeated titles get `_2`, `_3`, ... suffixes.
pub fn write_card(
    record: &PowerRecord,
    out_dir: &Path,
    layout: &CardLayout,
    metrics: &dyn TextMetrics,
    seen: &mut HashMap<String, usize>,
) -> Result<PathBuf, Box<dyn Error>> {
    ensure_directory(out_dir)?;
    let content = CardContent::from_record(record);
    let stem = sanitize_filename(content.title);
    let path = resolve_card_path(out_dir, &stem, seen, CARD_EXT);

    let svg = render_card(record, layout, metrics);
    std::fs::write(&path, svg).map_err(|e| format!("Failed to write '{}': {e}", path.display()))?;
    Ok(path)
}
