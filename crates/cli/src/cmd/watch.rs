//! Watch a directory and route new files as they appear

use crate::CommonArgs;
use anyhow::{Context, Result};
use snapsort_core::WatchConfig;
use snapsort_watcher::WatchSession;

pub async fn run(common: CommonArgs, debounce_ms: Option<u64>, recursive: bool) -> Result<()> {
    let mut config = super::resolve_config(&common)?;
    apply_overrides(&mut config, debounce_ms, recursive);

    let dispatcher = super::build_dispatcher(&config, &common);
    let mut session = WatchSession::start(&common.path, config.recursive, dispatcher)?;

    println!(
        "Watching {} (press Ctrl-C to stop)",
        session.watch_root().display()
    );

    tokio::signal::ctrl_c()
        .await
        .context("Failed to wait for shutdown signal")?;

    session.stop()?;
    println!("Stopped.");
    Ok(())
}

/// Flags beat file values; an absent flag leaves the config untouched.
fn apply_overrides(config: &mut WatchConfig, debounce_ms: Option<u64>, recursive: bool) {
    if let Some(ms) = debounce_ms {
        config.debounce_ms = ms;
    }
    if recursive {
        config.recursive = true;
    }
}
