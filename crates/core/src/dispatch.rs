//! Event dispatching: one handler per event kind
//!
//! Only `Created` passes through the debounce gate; `Modified` events are
//! already restricted to content changes by the mapping layer and are
//! reported ungated. The asymmetry is a recorded design decision, not an
//! accident of control flow.

use crate::classify::classify;
use crate::debounce::DebounceFilter;
use crate::event::ChangeEvent;
use crate::report::{Notice, Reporter};
use crate::route::ArchiveRouter;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{trace, warn};

/// Receives change events and drives debounce, classification and routing.
///
/// `handle` takes `&self` and the dispatcher is `Send + Sync`, so the
/// notifier may invoke it from any number of background threads. No
/// per-event failure escapes: routing errors and unclassifiable names are
/// converted to notices and the loop carries on.
pub struct Dispatcher {
    debounce: DebounceFilter,
    router: ArchiveRouter,
    reporter: Arc<dyn Reporter>,
}

impl Dispatcher {
    pub fn new(
        debounce: DebounceFilter,
        router: ArchiveRouter,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            debounce,
            router,
            reporter,
        }
    }

    /// Handle one change event.
    pub fn handle(&self, event: ChangeEvent) {
        match event {
            ChangeEvent::Created(path) => self.on_created(path),
            ChangeEvent::Modified(path) => self.reporter.notice(Notice::Changed(path)),
            ChangeEvent::Deleted(path) => self.reporter.notice(Notice::Deleted(path)),
            ChangeEvent::Renamed { from, to } => {
                self.reporter.notice(Notice::Renamed { from, to })
            }
            ChangeEvent::Fault(description) => self.on_fault(description),
        }
    }

    fn on_created(&self, path: PathBuf) {
        if !self.debounce.accept(&path, Instant::now()) {
            trace!(path = %path.display(), "suppressed duplicate create notification");
            return;
        }

        self.reporter.notice(Notice::Created(path.clone()));
        self.route_new_file(&path);
    }

    fn on_fault(&self, description: String) {
        // Observational only: the notifier owns its own fault recovery.
        warn!(fault = %description, "watcher reported an internal fault");
        self.reporter.notice(Notice::Fault(description));
    }

    /// Classify `path` by its bare file name and move it into the archive,
    /// reporting the outcome either way.
    ///
    /// Shared by the live `Created` handler and the one-shot sweep over
    /// files already on disk. An unclassifiable name leaves the file in
    /// place; a failed move is reported and contained.
    pub fn route_new_file(&self, path: &Path) {
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            self.reporter.notice(Notice::Unclassifiable {
                path: path.to_path_buf(),
                reason: "path has no UTF-8 file name".to_string(),
            });
            return;
        };

        match classify(file_name) {
            Ok(partition) => match self.router.route(path, &partition) {
                Ok(dest) => self.reporter.notice(Notice::Moved {
                    from: path.to_path_buf(),
                    to: dest,
                }),
                Err(cause) => {
                    warn!(path = %path.display(), %cause, "archive move failed");
                    self.reporter.notice(Notice::MoveFailed {
                        path: path.to_path_buf(),
                        cause: cause.to_string(),
                    });
                }
            },
            Err(reason) => self.reporter.notice(Notice::Unclassifiable {
                path: path.to_path_buf(),
                reason: reason.to_string(),
            }),
        }
    }
}
