//! The `rfs` module provides the file operations, the read-or-create helper,
//! the debounced watcher and the config resolver built on top of them.

pub mod blocking;
pub mod config;
pub mod error;
pub mod files;
pub mod generator;
pub mod read_or_create;
pub mod settings;
pub mod watcher;
