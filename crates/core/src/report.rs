//! Reporting seam between the dispatcher and whatever renders its output
//!
//! The dispatcher decides *what* is worth reporting; formatting belongs to
//! the consumer. The CLI installs a console reporter, tests install a
//! recording one.

use parking_lot::Mutex;
use std::path::PathBuf;

/// An outcome the dispatcher wants surfaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Created(PathBuf),
    Changed(PathBuf),
    Deleted(PathBuf),
    Renamed { from: PathBuf, to: PathBuf },
    Fault(String),
    /// A created file was routed into the archive.
    Moved { from: PathBuf, to: PathBuf },
    /// A created file could not be classified; it stays where it is.
    Unclassifiable { path: PathBuf, reason: String },
    /// Routing failed; the loop continues.
    MoveFailed { path: PathBuf, cause: String },
}

/// Consumer of dispatcher outcomes.
pub trait Reporter: Send + Sync {
    fn notice(&self, notice: Notice);
}

/// Reporter that keeps every notice in memory, in arrival order.
pub struct RecordingReporter {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self {
            notices: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything reported so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }
}

impl Default for RecordingReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for RecordingReporter {
    fn notice(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}
