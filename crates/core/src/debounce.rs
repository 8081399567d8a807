//! Per-path debouncing of duplicate notifications
//!
//! Real filesystem-change APIs routinely emit several notifications for one
//! logical event (a single write often produces a created plus one or more
//! changed events). The filter here suppresses repeats for the same path
//! inside a short window, 200 ms by default.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Default suppression window.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(200);

/// Duplicate-notification filter with one entry per path ever seen.
///
/// The table is never evicted: a long-running session accumulates one entry
/// per distinct path. That is a documented limitation, not an accident; no
/// TTL or capacity policy is defined for it.
///
/// Safe to call from concurrent notification threads. The lookup-then-update
/// for a path is a single atomic step via the map's entry API, so two
/// near-simultaneous notifications for the same path cannot both be treated
/// as first.
pub struct DebounceFilter {
    window: Duration,
    seen: DashMap<PathBuf, Instant>,
}

impl DebounceFilter {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            seen: DashMap::new(),
        }
    }

    /// Decide whether a notification for `path` at time `now` should be
    /// processed.
    ///
    /// Returns `false` for a duplicate inside the window. A rejected
    /// duplicate does not refresh the stored time: the comparison is always
    /// against the originally accepted instant, not a sliding window.
    pub fn accept(&self, path: &Path, now: Instant) -> bool {
        match self.seen.entry(path.to_path_buf()) {
            Entry::Occupied(mut occupied) => {
                let last = *occupied.get();
                if now.saturating_duration_since(last) < self.window {
                    false
                } else {
                    occupied.insert(now);
                    true
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(now);
                true
            }
        }
    }

    /// Number of distinct paths tracked so far.
    pub fn tracked_paths(&self) -> usize {
        self.seen.len()
    }
}

impl Default for DebounceFilter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
