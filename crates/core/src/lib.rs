//! Core event handling for Snapsort
//!
//! This crate holds everything between the raw change notifications and the
//! filesystem moves they trigger:
//! - Per-path debouncing of duplicate notifications
//! - File-name classification into `year/month` archive partitions
//! - The ensure-directory-then-move routing step with error containment
//! - The dispatcher tying the three together, one handler per event kind

pub mod classify;
pub mod config;
pub mod debounce;
pub mod dispatch;
pub mod event;
pub mod report;
pub mod route;

pub use classify::{classify, ClassifyError, Partition};
pub use config::WatchConfig;
pub use debounce::DebounceFilter;
pub use dispatch::Dispatcher;
pub use event::ChangeEvent;
pub use report::{Notice, RecordingReporter, Reporter};
pub use route::{ArchiveRouter, RouteError};
