//! Filesystem snapshot backend.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use bulletin_core::error::StoreError;
use bulletin_core::ports::SnapshotBackend;

/// Stores each collection as `<dir>/<collection>.json`.
///
/// A write lands in a temp file first and is renamed over the previous
/// snapshot, so a crash mid-write leaves the old snapshot intact.
pub struct FsSnapshotBackend {
    dir: PathBuf,
}

impl FsSnapshotBackend {
    /// Open the backend, creating the directory if needed. Failure here is
    /// an unrecoverable startup condition for the caller.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        tracing::info!(dir = %dir.display(), "snapshot directory ready");
        Ok(Self { dir })
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{collection}.json"))
    }
}

#[async_trait]
impl SnapshotBackend for FsSnapshotBackend {
    async fn read(&self, collection: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match tokio::fs::read(self.path_for(collection)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write(&self, collection: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(collection);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data/snapshots");
        FsSnapshotBackend::open(&nested).await.unwrap();
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsSnapshotBackend::open(dir.path()).await.unwrap();

        backend.write("posts", b"[]").await.unwrap();
        assert_eq!(backend.read("posts").await.unwrap(), Some(b"[]".to_vec()));
        assert!(dir.path().join("posts.json").is_file());
    }

    #[tokio::test]
    async fn test_missing_snapshot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsSnapshotBackend::open(dir.path()).await.unwrap();
        assert_eq!(backend.read("posts").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_replaces_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsSnapshotBackend::open(dir.path()).await.unwrap();

        backend.write("posts", b"a longer first snapshot").await.unwrap();
        backend.write("posts", b"short").await.unwrap();
        assert_eq!(backend.read("posts").await.unwrap(), Some(b"short".to_vec()));
        assert!(!dir.path().join("posts.json.tmp").exists());
    }
}
