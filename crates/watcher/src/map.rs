//! Translation from raw `notify` events into the core event model
//!
//! The mapper is where the noisy, platform-specific event vocabulary gets
//! narrowed down:
//! - Only content modifications survive as `Modified`; attribute-only and
//!   name-only modify notifications never reach the dispatcher.
//! - Rename halves are paired up via the notify tracker id. An unmatched
//!   "renamed to" means a file moved in from outside the watch root and is
//!   surfaced as `Created`; an unmatched "renamed from" without a tracker is
//!   a move out and surfaces as `Deleted`.
//! - Everything unrecognized is dropped, not treated as an error.

use notify::event::{ModifyKind, RenameMode};
use notify::{Event, EventKind};
use snapsort_core::ChangeEvent;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::trace;

/// Stateful notify-to-core event mapper.
///
/// The only state is the table of pending rename-from halves, keyed by the
/// notify tracker id, waiting for their rename-to counterpart. A half whose
/// counterpart never arrives stays in the table for the life of the session;
/// like the debounce table, it has no eviction policy.
pub struct EventMapper {
    pending_renames: HashMap<usize, PathBuf>,
}

impl EventMapper {
    pub fn new() -> Self {
        Self {
            pending_renames: HashMap::new(),
        }
    }

    /// Map one raw event to zero or more core events.
    pub fn map(&mut self, event: Event) -> Vec<ChangeEvent> {
        match event.kind {
            EventKind::Create(_) => event.paths.into_iter().map(ChangeEvent::Created).collect(),

            EventKind::Modify(ModifyKind::Data(_)) => {
                event.paths.into_iter().map(ChangeEvent::Modified).collect()
            }

            EventKind::Modify(ModifyKind::Name(mode)) => self.map_rename(mode, event),

            EventKind::Remove(_) => event.paths.into_iter().map(ChangeEvent::Deleted).collect(),

            // Attribute-only modifications, access notifications and any
            // kind this version does not know about are ignored.
            other => {
                trace!(kind = ?other, "ignoring unhandled notification kind");
                Vec::new()
            }
        }
    }

    fn map_rename(&mut self, mode: RenameMode, event: Event) -> Vec<ChangeEvent> {
        let tracker = event.tracker();
        let mut paths = event.paths;

        match mode {
            RenameMode::Both if paths.len() >= 2 => {
                let to = paths.swap_remove(1);
                let from = paths.swap_remove(0);
                vec![ChangeEvent::Renamed { from, to }]
            }

            RenameMode::From => {
                let Some(from) = paths.pop() else {
                    return Vec::new();
                };
                match tracker {
                    Some(id) => {
                        self.pending_renames.insert(id, from);
                        Vec::new()
                    }
                    // No tracker means the halves cannot be paired; the
                    // file left the watch root as far as we can tell.
                    None => vec![ChangeEvent::Deleted(from)],
                }
            }

            RenameMode::To => {
                let Some(to) = paths.pop() else {
                    return Vec::new();
                };
                match tracker.and_then(|id| self.pending_renames.remove(&id)) {
                    Some(from) => vec![ChangeEvent::Renamed { from, to }],
                    // Moved in from outside the watch root: to the archive
                    // this is a brand new file.
                    None => vec![ChangeEvent::Created(to)],
                }
            }

            // Platforms that cannot tell which side they saw still supply
            // both paths when they know them.
            RenameMode::Any | RenameMode::Other if paths.len() >= 2 => {
                let to = paths.swap_remove(1);
                let from = paths.swap_remove(0);
                vec![ChangeEvent::Renamed { from, to }]
            }

            _ => {
                trace!(?mode, "ignoring unpaired rename notification");
                Vec::new()
            }
        }
    }

    /// Number of rename-from halves still waiting for their counterpart.
    pub fn pending_renames(&self) -> usize {
        self.pending_renames.len()
    }
}

impl Default for EventMapper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, DataChange, MetadataKind, RemoveKind};

    fn path(s: &str) -> PathBuf {
        PathBuf::from(s)
    }

    #[test]
    fn create_maps_to_created() {
        let mut mapper = EventMapper::new();
        let out = mapper.map(
            Event::new(EventKind::Create(CreateKind::File)).add_path(path("desc/a.png")),
        );
        assert_eq!(out, vec![ChangeEvent::Created(path("desc/a.png"))]);
    }

    #[test]
    fn content_modification_maps_to_modified() {
        let mut mapper = EventMapper::new();
        let out = mapper.map(
            Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Any)))
                .add_path(path("desc/a.png")),
        );
        assert_eq!(out, vec![ChangeEvent::Modified(path("desc/a.png"))]);
    }

    #[test]
    fn attribute_modification_is_dropped() {
        let mut mapper = EventMapper::new();
        let out = mapper.map(
            Event::new(EventKind::Modify(ModifyKind::Metadata(MetadataKind::Any)))
                .add_path(path("desc/a.png")),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn remove_maps_to_deleted() {
        let mut mapper = EventMapper::new();
        let out = mapper
            .map(Event::new(EventKind::Remove(RemoveKind::File)).add_path(path("desc/a.png")));
        assert_eq!(out, vec![ChangeEvent::Deleted(path("desc/a.png"))]);
    }

    #[test]
    fn access_and_unknown_kinds_are_ignored() {
        let mut mapper = EventMapper::new();
        assert!(mapper.map(Event::new(EventKind::Any)).is_empty());
        assert!(mapper
            .map(Event::new(EventKind::Other).add_path(path("desc/a.png")))
            .is_empty());
    }

    #[test]
    fn tracked_rename_halves_pair_up() {
        let mut mapper = EventMapper::new();

        let out = mapper.map(
            Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::From)))
                .add_path(path("desc/old.png"))
                .set_tracker(7),
        );
        assert!(out.is_empty());
        assert_eq!(mapper.pending_renames(), 1);

        let out = mapper.map(
            Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::To)))
                .add_path(path("desc/new.png"))
                .set_tracker(7),
        );
        assert_eq!(
            out,
            vec![ChangeEvent::Renamed {
                from: path("desc/old.png"),
                to: path("desc/new.png"),
            }]
        );
        assert_eq!(mapper.pending_renames(), 0);
    }

    #[test]
    fn both_sided_rename_maps_directly() {
        let mut mapper = EventMapper::new();
        let out = mapper.map(
            Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::Both)))
                .add_path(path("desc/old.png"))
                .add_path(path("desc/new.png")),
        );
        assert_eq!(
            out,
            vec![ChangeEvent::Renamed {
                from: path("desc/old.png"),
                to: path("desc/new.png"),
            }]
        );
    }

    #[test]
    fn unmatched_rename_to_is_a_creation() {
        let mut mapper = EventMapper::new();
        let out = mapper.map(
            Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::To)))
                .add_path(path("desc/arrived.png"))
                .set_tracker(42),
        );
        assert_eq!(out, vec![ChangeEvent::Created(path("desc/arrived.png"))]);
    }

    #[test]
    fn abandoned_rename_from_stays_pending() {
        let mut mapper = EventMapper::new();
        mapper.map(
            Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::From)))
                .add_path(path("desc/orphan.png"))
                .set_tracker(9),
        );

        // Unrelated traffic never pairs or evicts the waiting half.
        mapper.map(Event::new(EventKind::Create(CreateKind::File)).add_path(path("desc/b.png")));
        mapper.map(
            Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::To)))
                .add_path(path("desc/c.png"))
                .set_tracker(10),
        );
        assert_eq!(mapper.pending_renames(), 1);
    }

    #[test]
    fn untracked_rename_from_is_a_deletion() {
        let mut mapper = EventMapper::new();
        let out = mapper.map(
            Event::new(EventKind::Modify(ModifyKind::Name(RenameMode::From)))
                .add_path(path("desc/left.png")),
        );
        assert_eq!(out, vec![ChangeEvent::Deleted(path("desc/left.png"))]);
    }
}
