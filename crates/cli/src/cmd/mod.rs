//! Subcommand implementations

pub mod sweep;
pub mod watch;

use crate::report::ConsoleReporter;
use crate::CommonArgs;
use anyhow::Result;
use snapsort_core::{ArchiveRouter, DebounceFilter, Dispatcher, WatchConfig};
use std::path::PathBuf;
use std::sync::Arc;

/// Load the config file if one was given, otherwise start from defaults.
pub(crate) fn resolve_config(common: &CommonArgs) -> Result<WatchConfig> {
    match &common.config {
        Some(path) => WatchConfig::load(path),
        None => Ok(WatchConfig::default()),
    }
}

/// Assemble a dispatcher wired to the console reporter.
///
/// The archive root comes from the `--archive-root` flag when given;
/// otherwise the configured archive directory name is resolved against the
/// current directory.
pub(crate) fn build_dispatcher(config: &WatchConfig, common: &CommonArgs) -> Arc<Dispatcher> {
    let archive_root = common
        .archive_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.archive_dir));

    Arc::new(Dispatcher::new(
        DebounceFilter::new(config.debounce_window()),
        ArchiveRouter::new(archive_root),
        Arc::new(ConsoleReporter::new()),
    ))
}
