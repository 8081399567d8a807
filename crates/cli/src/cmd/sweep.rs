//! One-shot pass over files already sitting in a directory
//!
//! Uses the same classify-and-route path as the live loop, minus the
//! debounce gate: files on disk are not notifications and cannot be
//! duplicates.

use crate::CommonArgs;
use anyhow::{Context, Result};
use snapsort_core::Dispatcher;
use std::path::Path;
use walkdir::WalkDir;

pub fn run(common: CommonArgs, recursive: bool) -> Result<()> {
    let config = super::resolve_config(&common)?;
    let dispatcher = super::build_dispatcher(&config, &common);

    let swept = sweep_dir(&dispatcher, &common.path, recursive || config.recursive)?;
    tracing::debug!(swept, root = %common.path.display(), "sweep complete");
    println!("Swept {} file(s) from {}", swept, common.path.display());
    Ok(())
}

/// Route every file under `root`, reporting each outcome through the
/// dispatcher's reporter. Returns the number of files visited.
pub(crate) fn sweep_dir(dispatcher: &Dispatcher, root: &Path, recursive: bool) -> Result<usize> {
    anyhow::ensure!(
        root.is_dir(),
        "sweep root {} is not a directory",
        root.display()
    );

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut swept = 0;

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to read {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        dispatcher.route_new_file(entry.path());
        swept += 1;
    }

    Ok(swept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapsort_core::{ArchiveRouter, DebounceFilter, Dispatcher, Notice, RecordingReporter};
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn dispatcher_for(tmp: &TempDir) -> (Dispatcher, Arc<RecordingReporter>) {
        let reporter = Arc::new(RecordingReporter::new());
        let dispatcher = Dispatcher::new(
            DebounceFilter::default(),
            ArchiveRouter::new(tmp.path().join("Images")),
            reporter.clone(),
        );
        (dispatcher, reporter)
    }

    #[test]
    fn sweep_routes_existing_files() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("desc");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("20240210211522.png"), b"a").unwrap();
        fs::write(root.join("20250615120000.png"), b"b").unwrap();

        let (dispatcher, _) = dispatcher_for(&tmp);
        let swept = sweep_dir(&dispatcher, &root, false).unwrap();

        assert_eq!(swept, 2);
        assert!(tmp.path().join("Images/2024/02/20240210211522.png").is_file());
        assert!(tmp.path().join("Images/2025/06/20250615120000.png").is_file());
    }

    #[test]
    fn non_recursive_sweep_skips_subdirectories() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("desc");
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("sub/20240210211522.png"), b"nested").unwrap();

        let (dispatcher, reporter) = dispatcher_for(&tmp);
        let swept = sweep_dir(&dispatcher, &root, false).unwrap();

        assert_eq!(swept, 0);
        assert!(reporter.notices().is_empty());
        assert!(root.join("sub/20240210211522.png").exists());
    }

    #[test]
    fn recursive_sweep_descends() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("desc");
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("sub/20240210211522.png"), b"nested").unwrap();

        let (dispatcher, _) = dispatcher_for(&tmp);
        let swept = sweep_dir(&dispatcher, &root, true).unwrap();

        assert_eq!(swept, 1);
        assert!(tmp.path().join("Images/2024/02/20240210211522.png").is_file());
    }

    #[test]
    fn unclassifiable_files_are_reported_and_left() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("desc");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("x.png"), b"short").unwrap();

        let (dispatcher, reporter) = dispatcher_for(&tmp);
        let swept = sweep_dir(&dispatcher, &root, false).unwrap();

        assert_eq!(swept, 1);
        assert!(matches!(
            reporter.notices().as_slice(),
            [Notice::Unclassifiable { .. }]
        ));
        assert!(root.join("x.png").exists());
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let (dispatcher, _) = dispatcher_for(&tmp);
        assert!(sweep_dir(&dispatcher, &tmp.path().join("nope"), false).is_err());
    }
}
