//! Change listener
//!
//! Wraps `notify` behind a blocking loop that hands relevant changes to a
//! callback until the running flag is cleared (Ctrl+C).

mod change;
mod filter;

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::time::Duration;

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::{MudError, MudResult};

pub use change::{Change, ChangeKind};
pub use filter::ChangeFilter;

/// How often the loop checks the running flag
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Watch `root` recursively, calling `on_change` once per relevant event
/// that `filter` accepts.
///
/// Blocks until `running` becomes false. Fails only when the listener
/// cannot be installed, e.g. because `root` does not exist.
pub fn watch<F>(
    root: &Path,
    filter: &ChangeFilter,
    running: &AtomicBool,
    mut on_change: F,
) -> MudResult<()>
where
    F: FnMut(Change),
{
    let (tx, rx) = channel();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.send(event);
            }
        },
        notify::Config::default(),
    )
    .map_err(|e| watch_error(root, e))?;

    watcher
        .watch(root, RecursiveMode::Recursive)
        .map_err(|e| watch_error(root, e))?;

    tracing::info!(root = %root.display(), "watching for changes");

    while running.load(Ordering::SeqCst) {
        match rx.recv_timeout(POLL_INTERVAL) {
            Ok(event) => {
                match Change::from_event(event) {
                    Some(change) if filter.accepts(&change) => {
                        tracing::debug!(kind = %change.kind, paths = ?change.paths, "change");
                        on_change(change);
                    }
                    Some(change) => {
                        tracing::trace!(paths = ?change.paths, "ignored change");
                    }
                    None => {}
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(root = %root.display(), "stopped watching");
    Ok(())
}

fn watch_error(root: &Path, err: notify::Error) -> MudError {
    MudError::Watch {
        path: root.to_path_buf(),
        message: err.to_string(),
    }
}
