//! This library provides small helpers for working with files.
//! Besides plain existence checks, reads, writes, appends and removal it can read a file
//! or create it when missing, watch a file for changes with debounce, and load a JSON
//! config that is created interactively on first use.
//!
//! Every operation is an `async fn` returning [`Result`]; the [`blocking`] module offers
//! synchronous versions of the same operations.

pub mod logging;
pub mod rfs;

pub use rfs::blocking;
pub use rfs::config;
pub use rfs::error::{FilesError, Result, ResultExt};
pub use rfs::files::{append, exists, make_directories, read, remove, write};
pub use rfs::generator::Generator;
pub use rfs::read_or_create::{read_or_create, read_or_create_with_origin, Origin};
pub use rfs::settings::{Settings, DEFAULT_DEBOUNCE};
pub use rfs::watcher::{watch, watch_with_settings, watch_with_window, WatchHandle};
