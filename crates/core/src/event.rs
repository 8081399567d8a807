//! Change event model

use std::path::PathBuf;

/// A single filesystem change as seen by the dispatcher.
///
/// One variant per notification kind, so the per-kind handling in
/// [`crate::dispatch`] stays explicit: only `Created` passes through the
/// debounce gate, and `Modified` is constructed for content changes only
/// (the mapping layer drops attribute- and name-only modifications before
/// they reach this type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// A file appeared under the watch root.
    Created(PathBuf),
    /// File content was modified.
    Modified(PathBuf),
    /// A file was removed.
    Deleted(PathBuf),
    /// A file was renamed, with both sides of the rename known.
    Renamed { from: PathBuf, to: PathBuf },
    /// The underlying notifier reported an internal fault.
    ///
    /// Observational only: the dispatcher reports it and carries on. The
    /// notifier itself decides whether it keeps running.
    Fault(String),
}
