//! Debounced change notifications for a single path.
//!
//! Platform watchers tend to report one logical change several times (a save
//! is often a truncate followed by a write). The first notification of a burst
//! schedules the callback one window later; everything that arrives while that
//! callback is still pending is absorbed.
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use super::error::{FilesError, Result};
use super::files::require_path;
use super::settings::{Settings, DEFAULT_DEBOUNCE};

/// A live watch registration.
///
/// Notifications are delivered until the handle is dropped or
/// [`WatchHandle::unwatch`] is called. A callback still waiting for its
/// window to pass at that moment is not delivered.
pub struct WatchHandle {
    path: PathBuf,
    _watcher: RecommendedWatcher,
    task: JoinHandle<()>,
}

impl WatchHandle {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stops watching.
    pub fn unwatch(self) {}
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.task.abort();
        debug!(path = %self.path.display(), "unwatched");
    }
}

/// Calls `on_change` once per burst of changes to `path`, 30 ms after the
/// first change of the burst.
///
/// Must be called from within a Tokio runtime.
///
/// # Example
///
/// ```rust,no_run
/// # async fn example() -> rfs_files::Result<()> {
/// let handle = rfs_files::watch("notes.txt", |path| {
///     println!("{} changed", path.display());
/// })?;
/// // ...
/// handle.unwatch();
/// # Ok(())
/// # }
/// ```
pub fn watch<F>(path: impl AsRef<Path>, on_change: F) -> Result<WatchHandle>
where
    F: FnMut(&Path) + Send + 'static,
{
    watch_with_window(path, DEFAULT_DEBOUNCE, on_change)
}

/// [`watch`] with the quiet window taken from `settings`.
pub fn watch_with_settings<F>(
    path: impl AsRef<Path>,
    settings: &Settings,
    on_change: F,
) -> Result<WatchHandle>
where
    F: FnMut(&Path) + Send + 'static,
{
    watch_with_window(path, settings.debounce, on_change)
}

/// [`watch`] with a custom quiet window.
pub fn watch_with_window<F>(
    path: impl AsRef<Path>,
    window: Duration,
    on_change: F,
) -> Result<WatchHandle>
where
    F: FnMut(&Path) + Send + 'static,
{
    let path = path.as_ref();
    require_path(path)?;
    let runtime = Handle::try_current()
        .map_err(|error| FilesError::Runtime(io::Error::new(io::ErrorKind::Other, error)))?;

    let (notifications, received) = mpsc::unbounded_channel();
    let reported_path = path.to_path_buf();
    let mut watcher = notify::recommended_watcher(
        move |res: notify::Result<notify::Event>| match res {
            Ok(event) if matches!(event.kind, EventKind::Access(_)) => {}
            Ok(_) => {
                // The receiver is gone once the handle is dropped.
                let _ = notifications.send(());
            }
            Err(error) => {
                warn!(path = %reported_path.display(), %error, "watch error");
            }
        },
    )
    .map_err(|source| FilesError::Watch {
        path: path.to_path_buf(),
        source,
    })?;
    watcher
        .watch(path, RecursiveMode::NonRecursive)
        .map_err(|source| FilesError::Watch {
            path: path.to_path_buf(),
            source,
        })?;

    let task = runtime.spawn(debounce(received, window, path.to_path_buf(), on_change));
    debug!(path = %path.display(), window_ms = window.as_millis() as u64, "watching");

    Ok(WatchHandle {
        path: path.to_path_buf(),
        _watcher: watcher,
        task,
    })
}

pub(crate) async fn debounce<F>(
    mut notifications: mpsc::UnboundedReceiver<()>,
    window: Duration,
    path: PathBuf,
    mut on_change: F,
) where
    F: FnMut(&Path),
{
    while notifications.recv().await.is_some() {
        let pending = tokio::time::sleep_until(Instant::now() + window);
        tokio::pin!(pending);

        loop {
            tokio::select! {
                () = &mut pending => break,
                received = notifications.recv() => {
                    if received.is_none() {
                        return;
                    }
                }
            }
        }

        debug!(path = %path.display(), "changed");
        on_change(&path);
    }
}
