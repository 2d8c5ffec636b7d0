use std::path::Path;

use tracing::{debug, info};

use super::error::Result;
use super::files;
use super::generator::Generator;

/// Where the content returned by [`read_or_create_with_origin`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The file was already there and has been read.
    Existing,
    /// The file was missing and has been written from the generator.
    Created,
}

/// Returns the content of the file at `path`, creating it from `generator`
/// first when it does not exist.
///
/// When the file exists the generator is dropped without being run. On
/// success the file exists and holds exactly the returned content.
///
/// # Example
///
/// ```rust,no_run
/// # async fn example() -> rfs_files::Result<()> {
/// use rfs_files::{read_or_create, Generator};
///
/// let notes = read_or_create("notes.txt", Generator::from("# notes\n")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn read_or_create(path: impl AsRef<Path>, generator: Generator<'_>) -> Result<String> {
    read_or_create_with_origin(path, generator)
        .await
        .map(|(content, _)| content)
}

/// Same as [`read_or_create`], also telling whether the file was created.
pub async fn read_or_create_with_origin(
    path: impl AsRef<Path>,
    generator: Generator<'_>,
) -> Result<(String, Origin)> {
    let path = path.as_ref();

    if files::exists(path).await? {
        debug!(path = %path.display(), "file exists, reading");
        let content = files::read(path).await?;
        return Ok((content, Origin::Existing));
    }

    info!(path = %path.display(), ?generator, "creating new file");
    let content = generator.generate().await?;
    let content = files::write(path, content).await?;

    Ok((content, Origin::Created))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use tempfile::TempDir;

    use super::*;
    use crate::rfs::error::FilesError;

    #[tokio::test]
    async fn missing_path_is_created_with_generated_content() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/new.txt");

        let (content, origin) =
            read_or_create_with_origin(&path, Generator::from("hello")).await?;

        assert_eq!(origin, Origin::Created);
        assert_eq!(content, "hello");
        assert_eq!(files::read(&path).await?, "hello");
        Ok(())
    }

    #[tokio::test]
    async fn existing_file_does_not_run_the_generator() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("existing.txt");
        files::write(&path, "before").await?;

        let called = Arc::new(AtomicBool::new(false));
        let flag = called.clone();
        let generator = Generator::compute(move || async move {
            flag.store(true, Ordering::SeqCst);
            Ok(String::from("after"))
        });

        let (content, origin) = read_or_create_with_origin(&path, generator).await?;

        assert_eq!(origin, Origin::Existing);
        assert_eq!(content, "before");
        assert!(!called.load(Ordering::SeqCst));
        Ok(())
    }

    #[tokio::test]
    async fn failing_generator_leaves_no_file() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("never.txt");

        let generator = Generator::compute(|| async { Err(FilesError::defaults("broken")) });
        let error = read_or_create(&path, generator).await.unwrap_err();

        assert!(error.is_defaults());
        assert!(!files::exists(&path).await?);
        Ok(())
    }

    #[tokio::test]
    async fn empty_generator_creates_empty_file() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");

        assert_eq!(read_or_create(&path, Generator::default()).await?, "");
        assert!(files::exists(&path).await?);
        Ok(())
    }
}
