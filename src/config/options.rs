// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use super::layout::CardLayout;
use super::sheet::SheetLayout;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseMode {
    /// HTML or MHTML export (quoted-printable is detected and decoded).
    Markup,
    /// Hand-maintained plain-text listing.
    Text,
}

impl ParseMode {
    pub fn default_input(&self) -> &'static str {
        match self {
            ParseMode::Markup => DEFAULT_HTML_INPUT,
            ParseMode::Text => DEFAULT_TXT_INPUT,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub mode: ParseMode,
    input: Option<PathBuf>,
    pub output: PathBuf,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            mode: ParseMode::Markup,
            input: None,
            output: PathBuf::from(DEFAULT_JSON),
        }
    }
}

impl ParseOptions {
    pub fn with_mode(mode: ParseMode) -> Self {
        Self { mode, ..Self::default() }
    }

    /// Explicit input if one was given, otherwise the mode's default file.
    pub fn input(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.mode.default_input()))
    }

    pub fn set_input(&mut self, path: impl Into<PathBuf>) {
        self.input = Some(path.into());
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub layout: CardLayout,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_JSON),
            out_dir: PathBuf::from(DEFAULT_CARDS_DIR),
            layout: CardLayout::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnderlineOptions {
    pub cards_dir: PathBuf,
    pub layout: CardLayout,
}

impl Default for UnderlineOptions {
    fn default() -> Self {
        Self {
            cards_dir: PathBuf::from(DEFAULT_CARDS_DIR),
            layout: CardLayout::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetOptions {
    pub input_dir: PathBuf,
    pub out_dir: PathBuf,
    /// `None` skips the cut-guide variant.
    pub guides_dir: Option<PathBuf>,
    pub layout: SheetLayout,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_PRINT_READY_DIR),
            out_dir: PathBuf::from(DEFAULT_SHEETS_DIR),
            guides_dir: Some(PathBuf::from(DEFAULT_GUIDES_DIR)),
            layout: SheetLayout::default(),
        }
    }
}
