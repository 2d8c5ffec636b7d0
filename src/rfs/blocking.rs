//! Synchronous versions of the file operations.
//!
//! Each call drives the asynchronous operation to completion on a private
//! current-thread runtime. Called from inside a Tokio runtime they return
//! [`FilesError::Runtime`]; use the `async` functions there.
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

use tokio::runtime::{Builder, Handle};

use super::config::{ConfigObject, ConfigResolver, DefaultsProvider, Prompter, Question};
use super::error::{FilesError, Result};
use super::files;
use super::generator::Generator;
use super::read_or_create;

fn block_on<F, T>(operation: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    if Handle::try_current().is_ok() {
        return Err(FilesError::Runtime(io::Error::new(
            io::ErrorKind::Other,
            "blocking call inside an asynchronous runtime",
        )));
    }
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(FilesError::Runtime)?;
    runtime.block_on(operation)
}

pub fn exists(path: impl AsRef<Path>) -> Result<bool> {
    block_on(files::exists(path))
}

pub fn read(path: impl AsRef<Path>) -> Result<String> {
    block_on(files::read(path))
}

pub fn write(path: impl AsRef<Path>, content: impl Into<String>) -> Result<String> {
    block_on(files::write(path, content))
}

pub fn append(path: impl AsRef<Path>, content: impl Into<String>) -> Result<String> {
    block_on(files::append(path, content))
}

pub fn remove(path: impl AsRef<Path>) -> Result<()> {
    block_on(files::remove(path))
}

pub fn make_directories(path: impl AsRef<Path>) -> Result<PathBuf> {
    block_on(files::make_directories(path))
}

pub fn read_or_create(path: impl AsRef<Path>, generator: Generator<'_>) -> Result<String> {
    block_on(read_or_create::read_or_create(path, generator))
}

pub fn resolve_config<P>(
    resolver: &ConfigResolver,
    path: impl AsRef<Path>,
    defaults: DefaultsProvider<'_>,
    questions: &[Question],
    prompter: &mut P,
) -> Result<ConfigObject>
where
    P: Prompter + ?Sized,
{
    block_on(resolver.resolve(path, defaults, questions, prompter))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn blocking_write_then_read() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sub/test.txt");

        write(&path, "Hello, world!")?;
        append(&path, "\nbye")?;

        assert!(exists(&path)?);
        assert_eq!(read(&path)?, "Hello, world!\nbye");

        remove(dir.path().join("sub"))?;
        assert!(!exists(&path)?);
        Ok(())
    }

    #[tokio::test]
    async fn blocking_call_inside_a_runtime_is_refused() {
        let error = exists("Cargo.toml").unwrap_err();
        assert!(matches!(error, FilesError::Runtime(_)));
    }

    #[test]
    fn blocking_read_or_create_keeps_existing_content() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");

        assert_eq!(read_or_create(&path, Generator::from("first"))?, "first");
        assert_eq!(read_or_create(&path, Generator::from("second"))?, "first");
        Ok(())
    }
}
