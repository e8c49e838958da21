// src/config/sheet.rs
//! Print sheet geometry: US Letter landscape at 300 DPI, 4 x 2 cards.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetLayout {
    pub page_width: u32,
    pub page_height: u32,
    pub dpi: u32,
    pub card_width: u32,
    pub card_height: u32,
    pub cols: u32,
    pub rows: u32,
    pub guide_color: [u8; 3],
    pub guide_width: u32,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            page_width: 11 * 300,          // 3300
            page_height: 17 * 300 / 2,     // 8.5in → 2550
            dpi: 300,
            card_width: 675,
            card_height: 1050,
            cols: 4,
            rows: 2,
            guide_color: [0xcc, 0xcc, 0xcc],
            guide_width: 2,
        }
    }
}

impl SheetLayout {
    pub fn capacity(&self) -> usize { (self.cols * self.rows) as usize }
    pub fn grid_width(&self) -> u32 { self.cols * self.card_width }
    pub fn grid_height(&self) -> u32 { self.rows * self.card_height }

    /// Left margin that centers the grid. Saturates when the grid is wider than the page.
    pub fn margin_x(&self) -> u32 { self.page_width.saturating_sub(self.grid_width()) / 2 }
    pub fn margin_y(&self) -> u32 { self.page_height.saturating_sub(self.grid_height()) / 2 }
}
