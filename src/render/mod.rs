// src/render/mod.rs
//! SVG card rendering.
//!
//! `content` picks what a record shows, `fit` chooses font sizes against
//! `metrics` estimates, `card` writes the SVG, and `decor` supplies the fixed
//! card furniture.

pub mod card;
pub mod content;
pub mod decor;
pub mod fit;
pub mod metrics;
pub mod wrap;

pub use card::{escape_xml, render_card, write_card};
pub use content::CardContent;
pub use fit::{fit_body, fit_header, BodyFit, HeaderFit};
pub use metrics::{HeuristicMetrics, TextMetrics};
