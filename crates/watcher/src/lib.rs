//! notify-backed watch session for Snapsort
//!
//! Owns the OS watcher and the processor thread that feeds the dispatcher.
//! A session is an explicit `start`/`stop` value rather than process-wide
//! state, so independent sessions can coexist (and do, in tests).

pub mod map;

use anyhow::{Context, Result};
use crossbeam_channel::unbounded;
use map::EventMapper;
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use snapsort_core::{ChangeEvent, Dispatcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::{debug, info};

/// A live watch over one directory.
///
/// Raw notifications arrive on a background notify thread, cross a channel,
/// and are mapped and dispatched on a dedicated processor thread. Stopping
/// is best-effort: the OS watcher is dropped, the channel drains, and the
/// processor exits; an event accepted just before shutdown may or may not
/// complete its move.
pub struct WatchSession {
    watch_root: PathBuf,
    watcher: Option<RecommendedWatcher>,
    processor: Option<JoinHandle<()>>,
}

impl WatchSession {
    /// Register the OS watcher on `watch_root` and start dispatching.
    pub fn start(
        watch_root: &Path,
        recursive: bool,
        dispatcher: Arc<Dispatcher>,
    ) -> Result<Self> {
        anyhow::ensure!(
            watch_root.is_dir(),
            "watch root {} is not a directory",
            watch_root.display()
        );

        let (tx, rx) = unbounded();

        let mut watcher = RecommendedWatcher::new(
            move |result| {
                // Send failures mean the session is shutting down.
                let _ = tx.send(result);
            },
            notify::Config::default(),
        )
        .context("Failed to create filesystem watcher")?;

        let mode = if recursive {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher
            .watch(watch_root, mode)
            .with_context(|| format!("Failed to watch {}", watch_root.display()))?;

        let processor = std::thread::spawn(move || {
            let mut mapper = EventMapper::new();
            // Ends when the watcher (the only sender) is dropped.
            for result in rx {
                match result {
                    Ok(raw) => {
                        for event in mapper.map(raw) {
                            dispatcher.handle(event);
                        }
                    }
                    Err(err) => dispatcher.handle(ChangeEvent::Fault(err.to_string())),
                }
            }
            debug!("watch processor drained and exited");
        });

        info!(root = %watch_root.display(), recursive, "watch session started");

        Ok(Self {
            watch_root: watch_root.to_path_buf(),
            watcher: Some(watcher),
            processor: Some(processor),
        })
    }

    /// Stop watching. Idempotent.
    ///
    /// Drops the OS watcher, which closes the channel; the processor thread
    /// drains whatever is already queued and is then joined.
    pub fn stop(&mut self) -> Result<()> {
        self.watcher.take();
        if let Some(processor) = self.processor.take() {
            processor
                .join()
                .map_err(|_| anyhow::anyhow!("watch processor thread panicked"))?;
            info!(root = %self.watch_root.display(), "watch session stopped");
        }
        Ok(())
    }

    pub fn watch_root(&self) -> &Path {
        &self.watch_root
    }

    pub fn is_running(&self) -> bool {
        self.watcher.is_some()
    }
}

impl Drop for WatchSession {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}
