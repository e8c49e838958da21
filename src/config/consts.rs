// src/config/consts.rs

// Parse
pub const DEFAULT_HTML_INPUT: &str = "marvel_powers.html";
pub const DEFAULT_TXT_INPUT: &str = "marvel_powers.txt";
pub const DEFAULT_JSON: &str = "marvel_powers.json";

// Render
pub const DEFAULT_CARDS_DIR: &str = "cards";
pub const CARD_EXT: &str = "svg";
pub const UNKNOWN_POWER: &str = "Unknown Power";

// Sheets
pub const DEFAULT_PRINT_READY_DIR: &str = "print_ready";
pub const DEFAULT_SHEETS_DIR: &str = "print_sheets";
pub const DEFAULT_GUIDES_DIR: &str = "print_sheets_with_guides";
pub const SHEET_EXT: &str = "png";

// Diagnostics
pub const LOG_FILE: &str = ".powercards/debug.log";
pub const SUMMARY_PREVIEW: usize = 5;
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;
