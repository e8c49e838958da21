// src/core/mod.rs

pub mod html;
pub mod quoted_printable;
pub mod sanitize;

pub use html::Html;
