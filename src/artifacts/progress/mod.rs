//! Interactive progress feedback
//!
//! The comparator reports every entry it is about to do I/O on. Reporting is best-effort:
//! write failures are dropped and nothing flows back into the comparison, so swapping the
//! [`Spinner`] for [`Silent`] never changes the computed diff.

use std::cell::{Cell, RefCell};
use std::io::Write;
use std::path::{Path, PathBuf};

const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Widest path shown on the status line
const STATUS_WIDTH: usize = 72;

const CLEAR_LINE: &str = "\x1b[2K\x1b[G";

pub trait ProgressSink {
    fn on_visit(&self, path: &Path);

    /// Clear whatever the sink left on screen
    fn finish(&self) {}
}

/// Sink for quiet and non-interactive runs
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl ProgressSink for Silent {
    fn on_visit(&self, _path: &Path) {}
}

/// Single-line spinner showing the entry currently being compared
pub struct Spinner {
    roots: Vec<PathBuf>,
    step: Cell<usize>,
    writer: RefCell<Box<dyn Write>>,
}

impl Spinner {
    pub fn new(roots: Vec<PathBuf>, writer: Box<dyn Write>) -> Self {
        Spinner {
            roots,
            step: Cell::new(0),
            writer: RefCell::new(writer),
        }
    }

    pub fn stderr(roots: Vec<PathBuf>) -> Self {
        Self::new(roots, Box::new(std::io::stderr()))
    }

    fn next_frame(&self) -> &'static str {
        let step = self.step.get();
        self.step.set((step + 1) % FRAMES.len());
        FRAMES[step]
    }

    /// Path relative to whichever root contains it
    fn display_path(&self, path: &Path) -> String {
        let relative = self
            .roots
            .iter()
            .find_map(|root| path.strip_prefix(root).ok())
            .unwrap_or(path);

        truncate_left(&relative.to_string_lossy(), STATUS_WIDTH)
    }
}

impl ProgressSink for Spinner {
    fn on_visit(&self, path: &Path) {
        let frame = self.next_frame();
        let shown = self.display_path(path);

        let mut writer = self.writer.borrow_mut();
        let _ = write!(writer, "{CLEAR_LINE} {frame} {shown}");
        let _ = writer.flush();
    }

    fn finish(&self) {
        let mut writer = self.writer.borrow_mut();
        let _ = write!(writer, "{CLEAR_LINE}");
        let _ = writer.flush();
    }
}

/// Keep the tail of `text`, marking the cut with a leading `...`
pub fn truncate_left(text: &str, width: usize) -> String {
    let length = text.chars().count();
    if length <= width {
        return text.to_string();
    }

    let keep = width.saturating_sub(3);
    let tail = text.chars().skip(length - keep).collect::<String>();
    format!("...{tail}")
}
