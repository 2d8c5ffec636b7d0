use rfs_files::{append, exists, make_directories, read, remove, write, Result};
use tempfile::TempDir;

#[tokio::test]
async fn basic_write_and_read() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test.txt");

    let written = write(&path, "Hello, world!").await?;

    assert_eq!(written, "Hello, world!");
    assert_eq!(read(&path).await?, "Hello, world!");
    Ok(())
}

#[tokio::test]
async fn write_creates_parent_directories() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a/b/c/test.txt");

    write(&path, "deep").await?;

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "deep");
    Ok(())
}

#[tokio::test]
async fn write_overwrites_existing_content() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test.txt");

    write(&path, "a much longer first version").await?;
    write(&path, "short").await?;

    assert_eq!(read(&path).await?, "short");
    Ok(())
}

#[tokio::test]
async fn write_of_empty_content_creates_empty_file() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");

    write(&path, "").await?;

    assert!(exists(&path).await?);
    assert_eq!(read(&path).await?, "");
    Ok(())
}

#[tokio::test]
async fn append_creates_then_appends() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.txt");

    append(&path, "one\n").await?;
    append(&path, "two\n").await?;

    assert_eq!(read(&path).await?, "one\ntwo\n");
    Ok(())
}

#[tokio::test]
async fn remove_of_nonexistent_path_succeeds() -> Result<()> {
    let dir = TempDir::new().unwrap();

    remove(dir.path().join("never_created.txt")).await?;
    remove(dir.path().join("never/created/dir")).await?;
    Ok(())
}

#[tokio::test]
async fn remove_deletes_files_and_whole_directories() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("file.txt");
    let tree = dir.path().join("tree");
    write(&file, "x").await?;
    write(tree.join("inner/leaf.txt"), "y").await?;

    remove(&file).await?;
    remove(&tree).await?;

    assert!(!exists(&file).await?);
    assert!(!exists(&tree).await?);
    Ok(())
}

#[tokio::test]
async fn make_directories_is_idempotent() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("x/y/z");

    assert_eq!(make_directories(&path).await?, path);
    assert_eq!(make_directories(&path).await?, path);
    assert!(std::fs::metadata(&path).unwrap().is_dir());
    Ok(())
}

#[tokio::test]
async fn read_of_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();

    let error = read(dir.path().join("missing.txt")).await.unwrap_err();

    assert!(error.is_not_found());
}

#[tokio::test]
async fn reading_a_directory_is_an_io_error() {
    let dir = TempDir::new().unwrap();

    let error = read(dir.path()).await.unwrap_err();

    assert!(error.is_io());
}
