use async_trait::async_trait;

use crate::error::StoreError;

/// Durable medium behind the document store: one named snapshot per
/// collection.
///
/// Implementations must satisfy these invariants:
/// - A write replaces the previous snapshot in full.
/// - A read after a successful write returns exactly the written bytes.
/// - A missing snapshot is `Ok(None)`, not an error.
/// - I/O failures are propagated, never silently ignored.
#[async_trait]
pub trait SnapshotBackend: Send + Sync {
    /// Read a collection snapshot.
    async fn read(&self, collection: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Overwrite a collection snapshot.
    async fn write(&self, collection: &str, bytes: &[u8]) -> Result<(), StoreError>;
}
