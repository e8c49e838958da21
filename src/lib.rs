// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod power;
pub mod specs;

pub mod file;
pub mod progress;
pub mod render;
pub mod runner;
pub mod sheets;
pub mod underline;

pub use power::PowerRecord;
