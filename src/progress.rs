// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting used by the pipeline stages.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one artifact has been written (a card, a sheet, a JSON file).
    fn item_done(&mut self, _name: &str, _path: &Path) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints progress lines to stdout.
#[derive(Default)]
pub struct ConsolePrinter {
    total: usize,
    done: usize,
}

impl Progress for ConsolePrinter {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, name: &str, path: &Path) {
        self.done += 1;
        if self.total > 0 {
            println!("[{}/{}] {name} → {}", self.done, self.total, path.display());
        } else {
            println!("{name} → {}", path.display());
        }
    }

    fn finish(&mut self) {
        if self.total > 0 {
            println!("Done: {}/{}", self.done, self.total);
        }
    }
}

/// Records everything it is told; handy in tests.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub lines: Vec<String>,
    pub items: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = Some(total); }
    fn log(&mut self, msg: &str) { self.lines.push(msg.to_string()); }
    fn item_done(&mut self, name: &str, _path: &Path) { self.items.push(name.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}
