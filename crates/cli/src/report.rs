//! Console rendering of dispatcher notices

use owo_colors::OwoColorize;
use snapsort_core::{Notice, Reporter};

/// Human-readable, one-line-per-event console reporter.
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn notice(&self, notice: Notice) {
        match notice {
            Notice::Created(path) => {
                println!("{} {}", "Created:".green(), path.display());
            }
            Notice::Changed(path) => {
                println!("{} {}", "Changed:".cyan(), path.display());
            }
            Notice::Deleted(path) => {
                println!("{} {}", "Deleted:".yellow(), path.display());
            }
            Notice::Renamed { from, to } => {
                println!("{}", "Renamed:".cyan());
                println!("    Old: {}", from.display());
                println!("    New: {}", to.display());
            }
            Notice::Fault(description) => {
                println!("{} {}", "Error:".red(), description);
            }
            Notice::Moved { to, .. } => {
                println!("{} {}", "Moved to:".green(), to.display());
            }
            Notice::Unclassifiable { path, reason } => {
                println!(
                    "{} {} ({})",
                    "Cannot classify:".yellow(),
                    path.display(),
                    reason
                );
            }
            Notice::MoveFailed { path, cause } => {
                println!("{} {} ({})", "Move failed:".red(), path.display(), cause);
            }
        }
    }
}
