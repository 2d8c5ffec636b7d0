//! Diagnostics for the `rfs-files` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the application.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaults to `warn`. Output goes to stderr so that stdout
/// stays free for prompts and results.
///
/// # Example
/// ```bash
/// RUST_LOG=rfs_files=debug rfs-files watch notes.txt
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
