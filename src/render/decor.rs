// src/render/decor.rs
// Fixed card furniture. Nothing here depends on the record being drawn.

use crate::config::layout::CardLayout;

const WHITE: &str = "#fff";
const BAR_TOP: &str = "#444";
const BAR_BOTTOM: &str = "#555";
const DOT: &str = "#e0e0e0";
const HATCH: &str = "#eee";
const BORDER: &str = "#ccc";
const RAIL: &str = "#e0e0e0";
const RAIL_WIDTH: f32 = 4.0;
const GLOSS_HEIGHT: f32 = 40.0;

const EMBLEM_FILL: &str = "#222";
const EMBLEM_OPACITY: f32 = 0.04;
const EMBLEM_SCALE: f32 = 1.71;
const EMBLEM_ORIGIN: (f32, f32) = (175.0, 174.0);
const EMBLEM_PATHS: [&str; 2] = [
    "M 62 52.21 a 167.2 167.2 0 0 0 -27 32.24 l 140 154.37 L 314.47 84 a 166.25 166.25 0 0 0 -27.54 -32.22 L 211 112.24 l -18.14 -38.43 s 4.46 -13.61 20.25 -6.75 c 0 0 4.12 -15.06 -20.24 -15.06 H 172 s -7.32 -1.17 -13.11 11 l -23.33 48.82 L 61.3 53.53",
    "M 76 306.78 a 167.08 167.08 0 0 0 195.41 1.93 l -64.62 -98 -32 35.41 -33.61 -35.41 z M 326.22 242.69 A 163.62 163.62 0 0 0 341 183.34 L 281.7 131 l -27.1 33.49 z M 341.14 178.16 c 0 -1.39 .11 -2.77 .11 -4.16 a 163.83 163.83 0 0 0 -24.49 -86.4 l -32.55 40.26 z M 252.06 167.63 l -27.32 33.8 68.790 88.48 a 165.78 165.78 0 0 0 30.84 -43.32 z M 21.77 242.69 A 163.62 163.62 0 0 1 7 183.34 L 66.29 131 l 27.09 33.52 z M 6.85 178.16 c 0 -1.39 -.11 -2.77 -.11 -4.16 a 163.83 163.83 0 0 1 24.49 -86.4 l 32.55 40.26 z M 95.93 167.63 l 27.32 33.8 -68.79 88.48 a 165.78 165.78 0 0 1 -30.84 -43.32 z",
];

const CAPTION: &str = "POWER";
const CAPTION_FONT: f32 = 36.0;
const CAPTION_SPACING: f32 = 6.0;
const CAPTION_BAR: (f32, f32) = (200.0, 6.0);
const CAPTION_BAR_FILL: &str = "#c00";
const CAPTION_BAR_FROM_BOTTOM: f32 = 20.0;

/// `<defs>`: dot grid, diagonal hatch, bar gradients, header gloss.
pub fn defs(out: &mut String) {
    wln!(out, "<defs>");
    wln!(out, r#"<pattern id="dotPattern" width="16" height="16" patternUnits="userSpaceOnUse"><circle cx="8" cy="8" r="1.5" fill="{DOT}"/></pattern>"#);
    wln!(
        out,
        r#"<pattern id="linen" width="40" height="40" patternUnits="userSpaceOnUse"><rect x="0" y="0" width="40" height="40" fill="none"/><line x1="0" y1="0" x2="40" y2="40" stroke="{HATCH}" stroke-width="0.5"/><line x1="40" y1="0" x2="0" y2="40" stroke="{HATCH}" stroke-width="0.5"/></pattern>"#
    );
    for id in ["headerGradient", "footerGradient"] {
        wln!(
            out,
            r#"<linearGradient id="{id}" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="{BAR_TOP}"/><stop offset="1" stop-color="{BAR_BOTTOM}"/></linearGradient>"#
        );
    }
    wln!(
        out,
        r#"<linearGradient id="headerGloss" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="{WHITE}" stop-opacity="0.25"/><stop offset="0.6" stop-color="{WHITE}" stop-opacity="0"/></linearGradient>"#
    );
    wln!(out, "</defs>");
}

/// Border, textured background, header/footer bars, side rails, emblem.
pub fn background(out: &mut String, l: &CardLayout) {
    let (w, h) = (l.width, l.height);
    let body_h = h - l.header_height - l.footer_height;

    wln!(out, r#"<rect x="1" y="1" width="{}" height="{}" fill="none" stroke="{BORDER}" stroke-width="2"/>"#, w - 2.0, h - 2.0);
    wln!(out, r#"<rect x="0" y="0" width="{w}" height="{h}" fill="url(#dotPattern)"/>"#);
    wln!(out, r#"<rect x="0" y="0" width="{w}" height="{h}" fill="url(#linen)" opacity="0.1"/>"#);
    wln!(out, r#"<rect x="0" y="0" width="{w}" height="{}" fill="url(#headerGradient)"/>"#, l.header_height);
    wln!(out, r#"<rect x="0" y="{}" width="{w}" height="{}" fill="url(#footerGradient)"/>"#, h - l.footer_height, l.footer_height);
    wln!(out, r#"<rect x="0" y="0" width="{w}" height="{GLOSS_HEIGHT}" fill="url(#headerGloss)"/>"#);
    wln!(out, r#"<rect x="0" y="{}" width="{RAIL_WIDTH}" height="{body_h}" fill="{RAIL}"/>"#, l.header_height);
    wln!(out, r#"<rect x="{}" y="{}" width="{RAIL_WIDTH}" height="{body_h}" fill="{RAIL}"/>"#, w - RAIL_WIDTH, l.header_height);

    let (ox, oy) = EMBLEM_ORIGIN;
    wln!(
        out,
        r#"<g class="emblem" transform="translate({},{}) scale({EMBLEM_SCALE}) translate(-{ox},-{oy})">"#,
        l.center_x(),
        h / 2.0
    );
    for d in EMBLEM_PATHS {
        wln!(out, r#"<path d="{d}" fill="{EMBLEM_FILL}" fill-opacity="{EMBLEM_OPACITY}"/>"#);
    }
    wln!(out, "</g>");
}

/// Centered "POWER" caption in the footer bar with its red underline.
pub fn footer(out: &mut String, l: &CardLayout) {
    let y = l.height - l.footer_height / 2.0 + 10.0;
    wln!(
        out,
        r#"<text x="{}" y="{y}" text-anchor="middle" alignment-baseline="middle" font-size="{CAPTION_FONT}" font-family="{}" fill="{WHITE}" font-weight="bold" letter-spacing="{CAPTION_SPACING}">{CAPTION}</text>"#,
        l.center_x(),
        l.font_family
    );
    let (bw, bh) = CAPTION_BAR;
    wln!(
        out,
        r#"<rect x="{}" y="{}" width="{bw}" height="{bh}" rx="3" fill="{CAPTION_BAR_FILL}"/>"#,
        l.center_x() - bw / 2.0,
        l.height - CAPTION_BAR_FROM_BOTTOM
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_bar_sits_near_bottom_edge() {
        let mut out = String::new();
        footer(&mut out, &CardLayout::default());
        assert!(out.contains(r#"<rect x="275" y="1060" width="200" height="6""#));
        assert!(out.contains(">POWER</text>"));
    }

    #[test]
    fn emblem_centered_on_card() {
        let mut out = String::new();
        background(&mut out, &CardLayout::default());
        assert!(out.contains("translate(375,540) scale(1.71) translate(-175,-174)"));
    }
}
