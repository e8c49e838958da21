// src/render/fit.rs
//! Font fitting for the header and body.
//!
//! Both searches walk font sizes downward from the layout's starting sizes and
//! stop at the first size whose *estimated* extent fits. Estimates come from
//! `TextMetrics`; nothing here measures real glyphs.

use crate::config::layout::CardLayout;

use super::content::CardContent;
use super::metrics::TextMetrics;
use super::wrap::wrap_to_width;

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderFit {
    /// One line, or two when the title had to be split.
    pub lines: Vec<String>,
    pub font_size: f32,
}

/// Fit the uppercased title into the header band.
///
/// One line is tried first at every size above the minimum. Failing that, the
/// words are split at the midpoint index (not the width-optimal point) and the
/// two lines are set at the minimum size. A single word stays on one line at
/// the minimum size.
pub fn fit_header(title: &str, layout: &CardLayout, metrics: &dyn TextMetrics) -> HeaderFit {
    let name = title.to_uppercase();
    let avail = layout.header_available_width();
    let spacing = layout.header_letter_spacing;
    let fits = |line: &str, size: f32| metrics.text_width(line, size, spacing) <= avail;

    let sizes = || {
        let (start, min, step) = (layout.header_font, layout.min_header_font, layout.header_font_step.max(1.0));
        std::iter::successors(Some(start), move |s| Some(s - step)).take_while(move |s| *s > min)
    };

    if let Some(size) = sizes().find(|&s| fits(&name, s)) {
        return HeaderFit { lines: vec![name], font_size: size };
    }

    let words: Vec<&str> = name.split_whitespace().collect();
    if words.len() < 2 {
        return HeaderFit { lines: vec![name], font_size: layout.min_header_font };
    }

    let mid = words.len() / 2;
    let first = words[..mid].join(" ");
    let second = words[mid..].join(" ");
    HeaderFit { lines: vec![first, second], font_size: layout.min_header_font }
}

/// The four body parameters shrunk together by `fit_body`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyFit {
    pub label_font: f32,
    pub value_font: f32,
    pub quote_font: f32,
    pub line_spacing: f32,
    /// Content is still taller than the body area at these sizes.
    pub overflow: bool,
}

impl BodyFit {
    pub fn initial(layout: &CardLayout) -> Self {
        Self {
            label_font: layout.label_font,
            value_font: layout.value_font,
            quote_font: layout.quote_font,
            line_spacing: layout.line_spacing,
            overflow: false,
        }
    }

    fn at_minimum(&self, layout: &CardLayout) -> bool {
        self.label_font <= layout.min_label_font
            && self.value_font <= layout.min_value_font
            && self.quote_font <= layout.min_quote_font
            && self.line_spacing <= layout.min_line_spacing
    }

    /// One step: every parameter still above its own minimum drops by 1.
    fn shrink(self, layout: &CardLayout) -> Self {
        let step = |v: f32, min: f32| if v > min { (v - 1.0).max(min) } else { v };
        Self {
            label_font: step(self.label_font, layout.min_label_font),
            value_font: step(self.value_font, layout.min_value_font),
            quote_font: step(self.quote_font, layout.min_quote_font),
            line_spacing: step(self.line_spacing, layout.min_line_spacing),
            overflow: self.overflow,
        }
    }

    /// Upper bound on shrink steps before every parameter is at its minimum.
    fn max_steps(layout: &CardLayout) -> usize {
        [
            layout.label_font - layout.min_label_font,
            layout.value_font - layout.min_value_font,
            layout.quote_font - layout.min_quote_font,
            layout.line_spacing - layout.min_line_spacing,
        ]
        .into_iter()
        .map(|d| d.max(0.0).ceil() as usize)
        .max()
        .unwrap_or(0)
    }

    /// Quote/value truncation only applies when enabled and nothing else helped.
    pub fn truncates(&self, layout: &CardLayout) -> bool {
        layout.truncate_overflow && self.overflow
    }
}

/// Estimated baseline of the last body line for `content` at `fit`.
pub fn estimate_height(content: &CardContent, fit: &BodyFit, layout: &CardLayout, metrics: &dyn TextMetrics) -> f32 {
    let mut y = layout.header_height + layout.padding;

    if let Some(quote) = content.quote {
        let lines = wrap_to_width(quote, fit.quote_font, layout.quote_width(), metrics).len();
        y += lines as f32 * (fit.quote_font + 6.0) + 12.0;
    }
    for field in &content.fields {
        let lines = wrap_to_width(field.value, fit.value_font, layout.value_width(), metrics).len();
        y += fit.label_font + lines as f32 * (fit.value_font + 3.0);
        y += fit.value_font + 14.0;
    }
    y
}

/// Shrink label, value, quote and spacing together until the estimate clears
/// the footer, or every parameter sits at its minimum.
pub fn fit_body(content: &CardContent, layout: &CardLayout, metrics: &dyn TextMetrics) -> BodyFit {
    let limit = layout.max_content_y();
    let mut fit = BodyFit::initial(layout);

    for _ in 0..=BodyFit::max_steps(layout) {
        if estimate_height(content, &fit, layout, metrics) <= limit {
            return fit;
        }
        if fit.at_minimum(layout) {
            break;
        }
        fit = fit.shrink(layout);
    }

    fit.overflow = estimate_height(content, &fit, layout, metrics) > limit;
    if fit.overflow {
        logw!("Fit: '{}' overflows at minimum sizes", content.title);
    }
    fit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power::PowerRecord;
    use crate::render::metrics::HeuristicMetrics;

    fn record(pairs: &[(&str, &str)]) -> PowerRecord {
        pairs.iter().copied().collect()
    }

    #[test]
    fn short_title_single_line_at_full_size() {
        let l = CardLayout::default();
        let fit = fit_header("Blink", &l, &HeuristicMetrics::default());
        assert_eq!(fit.lines, vec!["BLINK"]);
        assert_eq!(fit.font_size, 42.0);
    }

    #[test]
    fn medium_title_shrinks_before_splitting() {
        let l = CardLayout::default();
        // 22 chars: 22*42*0.6 + 21*6 = 680.4 <= 690
        let fit = fit_header("Telekinetic Barrier XL", &l, &HeuristicMetrics::default());
        assert_eq!(fit.lines.len(), 1);
        assert_eq!(fit.font_size, 42.0);
        // 26 chars: 36 → 711.6 (too wide), 34 → 680.4
        let fit = fit_header("Telekinetic Barrier Wall X", &l, &HeuristicMetrics::default());
        assert_eq!(fit.lines.len(), 1);
        assert_eq!(fit.font_size, 34.0);
    }

    #[test]
    fn long_title_splits_at_midpoint_word() {
        let l = CardLayout::default();
        let fit = fit_header("Enhanced Molecular Density Control Field", &l, &HeuristicMetrics::default());
        assert_eq!(fit.lines, vec!["ENHANCED MOLECULAR", "DENSITY CONTROL FIELD"]);
        // Both halves would fit at 42, but a split title is always set small.
        assert_eq!(fit.font_size, l.min_header_font);
        assert_eq!(fit.font_size, 24.0);
    }

    #[test]
    fn single_long_word_stays_at_minimum() {
        let l = CardLayout::default();
        let fit = fit_header("Supercalifragilisticexpialidocious", &l, &HeuristicMetrics::default());
        assert_eq!(fit.lines.len(), 1);
        assert_eq!(fit.font_size, 24.0);
    }

    #[test]
    fn small_body_keeps_start_sizes() {
        let l = CardLayout::default();
        let r = record(&[("power", "X"), ("cost", "1")]);
        let content = CardContent::from_record(&r);
        let fit = fit_body(&content, &l, &HeuristicMetrics::default());
        assert_eq!(fit, BodyFit::initial(&l));
    }

    #[test]
    fn long_body_shrinks_but_not_below_minimums() {
        let l = CardLayout::default();
        let effect = "word ".repeat(400);
        let r = record(&[("power", "X"), ("quote", effect.as_str()), ("effect", effect.as_str())]);
        let content = CardContent::from_record(&r);
        let fit = fit_body(&content, &l, &HeuristicMetrics::default());
        assert_eq!(fit.label_font, l.min_label_font);
        assert_eq!(fit.value_font, l.min_value_font);
        assert_eq!(fit.quote_font, l.min_quote_font);
        assert_eq!(fit.line_spacing, l.min_line_spacing);
        assert!(fit.overflow);
        assert!(!fit.truncates(&l));
    }

    #[test]
    fn medium_body_stops_between_start_and_minimum() {
        let l = CardLayout::default();
        let effect = "lorem ipsum ".repeat(40);
        let r = record(&[
            ("power", "X"), ("quote", "A short quote."), ("power_set", "Psionics"),
            ("action", "Standard"), ("duration", "Instant"), ("cost", "5 Focus"),
            ("range", "10 spaces"), ("effect", effect.as_str()),
        ]);
        let content = CardContent::from_record(&r);
        let m = HeuristicMetrics::default();
        let fit = fit_body(&content, &l, &m);
        assert!(fit.value_font < l.value_font);
        assert!(!fit.overflow);
        assert!(estimate_height(&content, &fit, &l, &m) <= l.max_content_y());
    }
}
