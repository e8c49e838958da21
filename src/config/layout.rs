// src/config/layout.rs
//! Card geometry and typography.
//!
//! One `CardLayout` is shared by every card in a batch. The `Default` impl holds
//! the production geometry (2.5in x 3.6in at 300 DPI); tests build alternate
//! layouts with struct update syntax.

/// Canonical display order of body fields: `(record key, display label)`.
pub const FIELD_ORDER: &[(&str, &str)] = &[
    ("power_set", "Power Set"),
    ("action", "Action"),
    ("trigger", "Trigger"),
    ("duration", "Duration"),
    ("cost", "Cost"),
    ("range", "Range"),
    ("effect", "Effect"),
    ("prerequisites", "Prerequisites"),
];

/// Fields that get a separator rule below their value block.
pub const UNDERLINE_FIELDS: &[&str] = &["power_set", "action", "duration", "cost", "effect"];

/// Reverse lookup: display label (as drawn, colon stripped) → record key.
pub fn field_key_for_label(label: &str) -> Option<&'static str> {
    FIELD_ORDER.iter().find(|(_, l)| *l == label).map(|(k, _)| *k)
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardLayout {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub header_height: f32,
    pub footer_height: f32,
    pub header_margin_x: f32,

    pub font_family: &'static str,

    pub header_font: f32,
    pub min_header_font: f32,
    pub header_font_step: f32,
    pub header_letter_spacing: f32,

    pub label_font: f32,
    pub value_font: f32,
    pub quote_font: f32,
    pub line_spacing: f32,
    pub min_label_font: f32,
    pub min_value_font: f32,
    pub min_quote_font: f32,
    pub min_line_spacing: f32,

    /// Offset of the value column from the label column.
    pub value_indent: f32,
    /// Horizontal slack taken off the body width when wrapping the quote.
    pub quote_inset: f32,

    /// Limit quote/value line counts when content overflows at minimum sizes.
    /// Off in production; nothing is ever cut with the default geometry.
    pub truncate_overflow: bool,
    pub max_quote_lines: usize,
    pub max_value_lines: usize,

    /// Separator rules added by the post-processor.
    pub rule_offset: f32,
    pub rule_fallback_offset: f32,
    pub rule_color: &'static str,
    pub rule_width: f32,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            width: 750.0,
            height: 1080.0,
            padding: 45.0,
            header_height: 135.0,
            footer_height: 105.0,
            header_margin_x: 30.0,

            font_family: "Arial, Helvetica, sans-serif",

            header_font: 42.0,
            min_header_font: 24.0,
            header_font_step: 2.0,
            header_letter_spacing: 6.0,

            label_font: 26.0,
            value_font: 26.0,
            quote_font: 26.0,
            line_spacing: 36.0,
            min_label_font: 16.0,
            min_value_font: 16.0,
            min_quote_font: 16.0,
            min_line_spacing: 22.0,

            value_indent: 210.0,
            quote_inset: 20.0,

            truncate_overflow: false,
            max_quote_lines: 3,
            max_value_lines: 4,

            rule_offset: 4.0,
            rule_fallback_offset: 32.0,
            rule_color: "#e0e0e0",
            rule_width: 2.0,
        }
    }
}

impl CardLayout {
    pub fn body_width(&self) -> f32 { self.width - 2.0 * self.padding }
    pub fn header_available_width(&self) -> f32 { self.width - 2.0 * self.header_margin_x }
    pub fn label_x(&self) -> f32 { self.padding }
    pub fn value_x(&self) -> f32 { self.padding + self.value_indent }
    pub fn value_width(&self) -> f32 { self.body_width() - self.value_indent }
    pub fn quote_width(&self) -> f32 { self.body_width() - self.quote_inset }
    /// Lowest baseline body content may reach before colliding with the footer.
    pub fn max_content_y(&self) -> f32 { self.height - self.footer_height - self.padding }
    pub fn center_x(&self) -> f32 { self.width / 2.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_matches_print_size() {
        let l = CardLayout::default();
        assert_eq!(l.body_width(), 660.0);
        assert_eq!(l.header_available_width(), 690.0);
        assert_eq!(l.value_x(), 255.0);
        assert_eq!(l.value_width(), 450.0);
        assert_eq!(l.max_content_y(), 930.0);
    }

    #[test]
    fn labels_map_back_to_keys() {
        assert_eq!(field_key_for_label("Power Set"), Some("power_set"));
        assert_eq!(field_key_for_label("Effect"), Some("effect"));
        assert_eq!(field_key_for_label("Quote"), None);
    }
}
