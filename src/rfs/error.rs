//! FilesError is returned by every operation of the crate.
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::config::ConfigFormat;

pub type Result<T> = std::result::Result<T, FilesError>;

/// Failure of a file operation, a config resolution or a watch registration
#[derive(Debug, Error)]
pub enum FilesError {
    /// A required argument was empty. Reported before any I/O happens.
    #[error("Required argument `{0}` is missing.")]
    MissingArgument(&'static str),

    #[error("{} does not exist.", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Content of an existing config file could not be parsed.
    #[error("{} does not contain valid {format}: {source}", path.display())]
    Parse {
        path: PathBuf,
        format: ConfigFormat,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Malformed config defaults: {0}")]
    Defaults(String),

    /// The interactive session could not be completed.
    #[error("Config session failed: {0}")]
    Workflow(String),

    #[error("Unable to watch {}: {source}", path.display())]
    Watch {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    #[error("Tokio runtime unavailable: {0}")]
    Runtime(#[source] io::Error),
}

impl FilesError {
    /// Wraps an I/O error, keeping "not found" apart from the other failures.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == io::ErrorKind::NotFound {
            FilesError::NotFound { path }
        } else {
            FilesError::Io { path, source }
        }
    }

    pub fn parse(
        path: impl AsRef<Path>,
        format: ConfigFormat,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        FilesError::Parse {
            path: path.as_ref().to_path_buf(),
            format,
            source: source.into(),
        }
    }

    pub fn defaults(message: impl Into<String>) -> Self {
        FilesError::Defaults(message.into())
    }

    pub fn workflow(message: impl Into<String>) -> Self {
        FilesError::Workflow(message.into())
    }

    pub fn is_missing_argument(&self) -> bool {
        matches!(self, FilesError::MissingArgument(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FilesError::NotFound { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, FilesError::Io { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, FilesError::Parse { .. })
    }

    pub fn is_defaults(&self) -> bool {
        matches!(self, FilesError::Defaults(_))
    }

    pub fn is_workflow(&self) -> bool {
        matches!(self, FilesError::Workflow(_))
    }

    pub fn is_watch(&self) -> bool {
        matches!(self, FilesError::Watch { .. })
    }
}

/// Explicit opt-out from error handling.
///
/// Callers that do not care about a failure must say so: `or_log` turns the
/// result into an `Option` and reports the error through `tracing`.
pub trait ResultExt<T> {
    fn or_log(self, context: &str) -> Option<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn or_log(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::error!(%error, "{context}");
                None
            }
        }
    }
}
