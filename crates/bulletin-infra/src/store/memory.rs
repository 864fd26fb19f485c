//! In-memory snapshot backend - used for tests and embedding.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use bulletin_core::error::StoreError;
use bulletin_core::ports::SnapshotBackend;

/// Keeps snapshots in a shared map. Clones share the same storage, so a
/// "restarted" store can be pointed at the data a previous one wrote.
/// Note: everything is lost when the last clone drops.
#[derive(Clone, Default)]
pub struct InMemorySnapshotBackend {
    snapshots: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemorySnapshotBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotBackend for InMemorySnapshotBackend {
    async fn read(&self, collection: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let snapshots = self.snapshots.read().await;
        Ok(snapshots.get(collection).cloned())
    }

    async fn write(&self, collection: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let mut snapshots = self.snapshots.write().await;
        snapshots.insert(collection.to_string(), bytes.to_vec());
        Ok(())
    }
}
