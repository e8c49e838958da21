// src/sheets.rs
//! Print sheet composition: tiles card PNGs onto fixed-size pages.

use std::error::Error;
use std::path::{Path, PathBuf};

use image::{imageops, Rgb, RgbImage};

use crate::config::consts::SHEET_EXT;
use crate::config::sheet::SheetLayout;
use crate::file::{ensure_directory, list_files_with_ext};

const PAGE_WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Where one card lands on a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Position of the card in the full, sorted input list.
    pub index: usize,
    pub row: u32,
    pub col: u32,
    pub x: u32,
    pub y: u32,
}

/// Split `count` cards into pages, filling each page row by row.
pub fn plan_sheets(count: usize, layout: &SheetLayout) -> Vec<Vec<Slot>> {
    let per_page = layout.capacity().max(1);
    let cols = layout.cols.max(1);
    let (mx, my) = (layout.margin_x(), layout.margin_y());

    (0..count)
        .collect::<Vec<_>>()
        .chunks(per_page)
        .map(|page| {
            page.iter()
                .enumerate()
                .map(|(i, &index)| {
                    let (row, col) = (i as u32 / cols, i as u32 % cols);
                    Slot {
                        index,
                        row,
                        col,
                        x: mx + col * layout.card_width,
                        y: my + row * layout.card_height,
                    }
                })
                .collect()
        })
        .collect()
}

pub fn sheet_filename(page: usize, guides: bool) -> String {
    if guides {
        format!("sheet_{page:03}_with_guides.{SHEET_EXT}")
    } else {
        format!("sheet_{page:03}.{SHEET_EXT}")
    }
}

/// Paint a solid rectangle, clipped to the image.
fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    let x_end = x.saturating_add(w).min(img.width());
    let y_end = y.saturating_add(h).min(img.height());
    for py in y.min(y_end)..y_end {
        for px in x.min(x_end)..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

/// Cut guides: interior column and row boundaries plus a border drawn inside
/// the grid's outer edge.
pub fn draw_guides(img: &mut RgbImage, layout: &SheetLayout) {
    let color = Rgb(layout.guide_color);
    let w = layout.guide_width.max(1);
    let half = w / 2;
    let (mx, my) = (layout.margin_x(), layout.margin_y());
    let (gw, gh) = (layout.grid_width(), layout.grid_height());

    for col in 1..layout.cols {
        let x = mx + col * layout.card_width;
        fill_rect(img, x.saturating_sub(half), my, w, gh, color);
    }
    for row in 1..layout.rows {
        let y = my + row * layout.card_height;
        fill_rect(img, mx, y.saturating_sub(half), gw, w, color);
    }

    // Border spans the grid inclusive of its far edge.
    fill_rect(img, mx, my, gw + 1, w, color);
    fill_rect(img, mx, (my + gh + 1).saturating_sub(w), gw + 1, w, color);
    fill_rect(img, mx, my, w, gh + 1, color);
    fill_rect(img, (mx + gw + 1).saturating_sub(w), my, w, gh + 1, color);
}

fn compose_page(cards: &[PathBuf], slots: &[Slot], layout: &SheetLayout) -> Result<RgbImage, Box<dyn Error>> {
    let mut page = RgbImage::from_pixel(layout.page_width, layout.page_height, PAGE_WHITE);
    for slot in slots {
        let path = &cards[slot.index];
        let card = image::open(path)
            .map_err(|e| format!("Failed to load card '{}': {e}", path.display()))?
            .to_rgb8();
        if card.dimensions() != (layout.card_width, layout.card_height) {
            logw!(
                "Sheets: '{}' is {}x{}, expected {}x{}",
                path.display(),
                card.width(),
                card.height(),
                layout.card_width,
                layout.card_height
            );
        }
        imageops::replace(&mut page, &card, slot.x as i64, slot.y as i64);
    }
    Ok(page)
}

/// Tile every `*.png` in `input_dir` (sorted by name) onto pages written to
/// `output_dir`. With `guides`, cut lines are drawn and file names carry a
/// `_with_guides` suffix. Returns the pages written, in order.
pub fn compose_sheets(
    input_dir: &Path,
    output_dir: &Path,
    layout: &SheetLayout,
    guides: bool,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let cards = list_files_with_ext(input_dir, SHEET_EXT)?;
    ensure_directory(output_dir)?;

    let pages = plan_sheets(cards.len(), layout);
    logf!(
        "Sheets: {} cards → {} pages in '{}' ({} DPI, guides: {guides})",
        cards.len(),
        pages.len(),
        output_dir.display(),
        layout.dpi
    );

    let mut written = Vec::with_capacity(pages.len());
    for (n, slots) in pages.iter().enumerate() {
        let mut page = compose_page(&cards, slots, layout)?;
        if guides {
            draw_guides(&mut page, layout);
        }
        let path = output_dir.join(sheet_filename(n + 1, guides));
        page.save(&path)
            .map_err(|e| format!("Failed to write sheet '{}': {e}", path.display()))?;
        logd!("Sheets: wrote '{}' with {} cards", path.display(), slots.len());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_cards_spill_onto_second_page() {
        let l = SheetLayout::default();
        let pages = plan_sheets(9, &l);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 8);
        assert_eq!(pages[1], vec![Slot { index: 8, row: 0, col: 0, x: 300, y: 225 }]);
    }

    #[test]
    fn slots_fill_rows_first() {
        let l = SheetLayout::default();
        let page = &plan_sheets(8, &l)[0];
        assert_eq!((page[3].row, page[3].col), (0, 3));
        assert_eq!((page[4].row, page[4].col), (1, 0));
        assert_eq!((page[7].x, page[7].y), (300 + 3 * 675, 225 + 1050));
    }

    #[test]
    fn no_cards_no_pages() {
        assert!(plan_sheets(0, &SheetLayout::default()).is_empty());
    }

    #[test]
    fn names_are_one_based_and_padded() {
        assert_eq!(sheet_filename(1, false), "sheet_001.png");
        assert_eq!(sheet_filename(12, true), "sheet_012_with_guides.png");
    }

    #[test]
    fn guides_land_on_boundaries() {
        let l = SheetLayout {
            page_width: 40, page_height: 30, card_width: 10, card_height: 10,
            cols: 2, rows: 2, guide_width: 2, ..SheetLayout::default()
        };
        let mut img = RgbImage::from_pixel(40, 30, PAGE_WHITE);
        draw_guides(&mut img, &l);
        let guide = Rgb(l.guide_color);
        // margins 10/5; interior column at x=20, row at y=15
        assert_eq!(*img.get_pixel(19, 10), guide);
        assert_eq!(*img.get_pixel(20, 10), guide);
        assert_eq!(*img.get_pixel(15, 14), guide);
        assert_eq!(*img.get_pixel(10, 5), guide);
        assert_eq!(*img.get_pixel(30, 25), guide);
        assert_eq!(*img.get_pixel(15, 10), PAGE_WHITE);
        assert_eq!(*img.get_pixel(0, 0), PAGE_WHITE);
    }
}
