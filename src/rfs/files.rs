//! Single-shot asynchronous wrappers over `tokio::fs`.
//!
//! Every operation rejects an empty path with
//! [`FilesError::MissingArgument`] before touching the filesystem, and maps
//! I/O failures through [`FilesError::io`] so that a missing file is always
//! reported as [`FilesError::NotFound`].
use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::error::{FilesError, Result};

pub(crate) fn require_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        Err(FilesError::MissingArgument("path"))
    } else {
        Ok(())
    }
}

/// Checks whether something exists at `path`.
///
/// Absence is `Ok(false)`. Any other failure of the check (for example a
/// permission error on a parent directory) is returned as an error.
pub async fn exists(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    require_path(path)?;

    match fs::metadata(path).await {
        Ok(_) => Ok(true),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(error) => Err(FilesError::io(path, error)),
    }
}

/// Reads the whole file as UTF-8 text.
pub async fn read(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    require_path(path)?;
    debug!(path = %path.display(), "read");

    fs::read_to_string(path)
        .await
        .map_err(|error| FilesError::io(path, error))
}

/// Replaces the content of the file, creating it and its parent directories
/// when needed. Returns the written content.
pub async fn write(path: impl AsRef<Path>, content: impl Into<String>) -> Result<String> {
    let path = path.as_ref();
    require_path(path)?;
    let content = content.into();
    debug!(path = %path.display(), bytes = content.len(), "write");

    create_parent_dirs(path).await;
    fs::write(path, content.as_bytes())
        .await
        .map_err(|error| FilesError::io(path, error))?;

    Ok(content)
}

/// Appends to the file, creating it when absent. Returns the appended content.
pub async fn append(path: impl AsRef<Path>, content: impl Into<String>) -> Result<String> {
    let path = path.as_ref();
    require_path(path)?;
    let content = content.into();
    debug!(path = %path.display(), bytes = content.len(), "append");

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|error| FilesError::io(path, error))?;
    file.write_all(content.as_bytes())
        .await
        .map_err(|error| FilesError::io(path, error))?;
    file.flush()
        .await
        .map_err(|error| FilesError::io(path, error))?;

    Ok(content)
}

/// Removes a file, or a directory with everything inside it.
///
/// Removing something that does not exist succeeds.
pub async fn remove(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    require_path(path)?;
    debug!(path = %path.display(), "remove");

    let metadata = match fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(error) => return Err(FilesError::io(path, error)),
    };

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path).await
    } else {
        fs::remove_file(path).await
    };

    match removed {
        Ok(()) => Ok(()),
        // Vanished between the check and the removal.
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(FilesError::io(path, error)),
    }
}

/// Creates the directory and all missing parents. Existing directories are
/// not an error. Returns the path.
pub async fn make_directories(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    require_path(path)?;
    debug!(path = %path.display(), "make directories");

    fs::create_dir_all(path)
        .await
        .map_err(|error| FilesError::io(path, error))?;

    Ok(path.to_path_buf())
}

async fn create_parent_dirs(path: &Path) {
    let Some(parent) = path.parent() else {
        return;
    };
    if parent.as_os_str().is_empty() {
        return;
    }
    if let Err(error) = fs::create_dir_all(parent).await {
        // The write that follows reports the real problem.
        debug!(parent = %parent.display(), %error, "unable to create parent directories");
    }
}
