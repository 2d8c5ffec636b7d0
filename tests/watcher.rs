use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rfs_files::{watch, watch_with_settings, write, Result, Settings};
use tempfile::TempDir;

async fn wait_for(calls: &AtomicUsize, expected: usize) -> bool {
    for _ in 0..100 {
        if calls.load(Ordering::SeqCst) >= expected {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    false
}

#[tokio::test]
async fn changes_to_a_watched_file_are_reported() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("watched.txt");
    write(&path, "start").await?;

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let handle = watch(&path, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    })?;

    write(&path, "changed").await?;

    assert!(wait_for(&calls, 1).await);
    assert_eq!(handle.path(), path.as_path());
    Ok(())
}

#[tokio::test]
async fn unwatched_file_is_no_longer_reported() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("watched.txt");
    write(&path, "start").await?;

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let handle = watch(&path, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    })?;
    handle.unwatch();

    write(&path, "changed").await?;
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn watching_a_missing_path_fails() {
    let dir = TempDir::new().unwrap();

    let error = watch(dir.path().join("missing.txt"), |_| {}).err().unwrap();

    assert!(error.is_watch());
}

#[tokio::test]
async fn settings_debounce_delays_the_callback() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("watched.txt");
    write(&path, "start").await?;
    let settings = Settings::new(dir.path()).with_debounce(Duration::from_millis(400));

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let _handle = watch_with_settings(&path, &settings, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    })?;

    write(&path, "changed").await?;
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert!(wait_for(&calls, 1).await);
    Ok(())
}
