// src/render/metrics.rs
//! Text measurement used by the fitting loops.
//!
//! There is no font rasterizer here: widths are estimated from character
//! counts. Layout code only talks to `TextMetrics`, so real glyph metrics can
//! be dropped in later without touching the fitting logic.

pub trait TextMetrics {
    /// Advance width of a single line of `text`.
    fn text_width(&self, text: &str, font_size: f32, letter_spacing: f32) -> f32;

    /// How many characters fit on one line of `width` units. Never less than 1.
    fn chars_per_line(&self, font_size: f32, width: f32) -> usize;
}

/// Arial/Helvetica rule of thumb: uppercase glyphs ≈ 0.6em, mixed case ≈ 0.55em.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeuristicMetrics {
    pub uppercase_em: f32,
    pub mixed_em: f32,
}

impl Default for HeuristicMetrics {
    fn default() -> Self {
        Self { uppercase_em: 0.6, mixed_em: 0.55 }
    }
}

impl TextMetrics for HeuristicMetrics {
    fn text_width(&self, text: &str, font_size: f32, letter_spacing: f32) -> f32 {
        let n = text.chars().count();
        if n == 0 {
            return 0.0;
        }
        n as f32 * font_size * self.uppercase_em + (n - 1) as f32 * letter_spacing
    }

    fn chars_per_line(&self, font_size: f32, width: f32) -> usize {
        let per_char = font_size * self.mixed_em;
        if per_char <= 0.0 {
            return usize::MAX;
        }
        ((width / per_char) as usize).max(1)
    }
}
