//! Document store: both record collections in memory, persisted as whole
//! snapshots through a [`SnapshotBackend`].

mod fs;
mod memory;

pub use fs::FsSnapshotBackend;
pub use memory::InMemorySnapshotBackend;

use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use bulletin_core::domain::{Comment, Post};
use bulletin_core::error::{DomainError, StoreError};
use bulletin_core::ports::SnapshotBackend;

/// Snapshot names on the durable medium.
const POSTS_COLLECTION: &str = "posts";
const COMMENTS_COLLECTION: &str = "comments";

/// Both record collections. Posts are kept newest first (creation prepends);
/// comments oldest first (creation appends).
#[derive(Debug, Default)]
pub struct Collections {
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

/// In-memory document store with whole-snapshot persistence.
///
/// The store exclusively owns both collections; repositories go through
/// [`DocumentStore::read`] and [`DocumentStore::mutate`]. A mutation holds
/// the write lock across the in-memory change and the persist of both
/// collections, so reads never observe, and the durable snapshot never
/// contains, a partial update.
pub struct DocumentStore {
    state: RwLock<Collections>,
    backend: Box<dyn SnapshotBackend>,
}

impl DocumentStore {
    pub fn new(backend: Box<dyn SnapshotBackend>) -> Self {
        Self {
            state: RwLock::new(Collections::default()),
            backend,
        }
    }

    /// Load both collections from the durable medium.
    ///
    /// A missing snapshot initializes its collection empty. A malformed
    /// snapshot is logged and reset to empty rather than aborting startup;
    /// only an unreadable medium is an error.
    pub async fn load(&self) -> Result<(), StoreError> {
        let posts: Vec<Post> = self.load_collection(POSTS_COLLECTION).await?;
        let comments: Vec<Comment> = self.load_collection(COMMENTS_COLLECTION).await?;
        tracing::info!(
            posts = posts.len(),
            comments = comments.len(),
            "document store loaded"
        );
        let mut state = self.state.write().await;
        state.posts = posts;
        state.comments = comments;
        Ok(())
    }

    async fn load_collection<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, StoreError> {
        match self.backend.read(name).await? {
            None => {
                tracing::info!(collection = name, "no snapshot found, starting empty");
                Ok(Vec::new())
            }
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(records) => Ok(records),
                Err(err) => {
                    tracing::warn!(
                        collection = name,
                        error = %err,
                        "malformed snapshot, resetting collection"
                    );
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Run a read-only closure over the collections.
    pub async fn read<R>(&self, f: impl FnOnce(&Collections) -> R) -> R {
        let state = self.state.read().await;
        f(&state)
    }

    /// Apply a mutation, then persist both collections before returning.
    ///
    /// If the closure fails nothing is persisted. If the durable write fails
    /// the in-memory state keeps the mutation and the caller sees
    /// [`DomainError::Persistence`]: the change happened but is not durable.
    pub async fn mutate<R>(
        &self,
        f: impl FnOnce(&mut Collections) -> Result<R, DomainError>,
    ) -> Result<R, DomainError> {
        let mut state = self.state.write().await;
        let out = f(&mut state)?;
        self.persist(&state).await?;
        Ok(out)
    }

    /// Persist the current state without mutating. Used for the final flush
    /// at shutdown.
    pub async fn flush(&self) -> Result<(), StoreError> {
        let state = self.state.read().await;
        let result = self.persist_inner(&state).await;
        if result.is_ok() {
            tracing::info!("document store flushed");
        }
        result
    }

    async fn persist(&self, state: &Collections) -> Result<(), DomainError> {
        self.persist_inner(state).await.map_err(|err| {
            tracing::error!(error = %err, "persist failed, in-memory state is ahead of disk");
            DomainError::from(err)
        })
    }

    async fn persist_inner(&self, state: &Collections) -> Result<(), StoreError> {
        let posts = serde_json::to_vec_pretty(&state.posts)?;
        let comments = serde_json::to_vec_pretty(&state.comments)?;
        self.backend.write(POSTS_COLLECTION, &posts).await?;
        self.backend.write(COMMENTS_COLLECTION, &comments).await?;
        tracing::debug!(
            posts = state.posts.len(),
            comments = state.comments.len(),
            "collections persisted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bulletin_core::domain::Post;

    use super::*;

    fn post(id: &str, title: &str) -> Post {
        Post::new(
            id.to_string(),
            title.to_string(),
            "content".to_string(),
            "admin".to_string(),
            Vec::new(),
        )
    }

    #[tokio::test]
    async fn test_load_without_snapshots_starts_empty() {
        let store = DocumentStore::new(Box::new(InMemorySnapshotBackend::new()));
        store.load().await.unwrap();
        let (posts, comments) = store.read(|s| (s.posts.len(), s.comments.len())).await;
        assert_eq!((posts, comments), (0, 0));
    }

    #[tokio::test]
    async fn test_malformed_snapshot_resets_only_that_collection() {
        let backend = InMemorySnapshotBackend::new();

        let seed = DocumentStore::new(Box::new(backend.clone()));
        seed.mutate(|s| {
            s.posts.insert(0, post("1", "kept"));
            Ok(())
        })
        .await
        .unwrap();
        backend
            .write(COMMENTS_COLLECTION, b"{ not json")
            .await
            .unwrap();

        let store = DocumentStore::new(Box::new(backend));
        store.load().await.unwrap();
        let (posts, comments) = store.read(|s| (s.posts.len(), s.comments.len())).await;
        assert_eq!(posts, 1);
        assert_eq!(comments, 0);
    }

    #[tokio::test]
    async fn test_reload_reproduces_insertion_order() {
        let backend = InMemorySnapshotBackend::new();

        let store = DocumentStore::new(Box::new(backend.clone()));
        for i in 0..5 {
            store
                .mutate(|s| {
                    s.posts.insert(0, post(&i.to_string(), "t"));
                    Ok(())
                })
                .await
                .unwrap();
        }

        let reloaded = DocumentStore::new(Box::new(backend));
        reloaded.load().await.unwrap();
        let ids = reloaded
            .read(|s| s.posts.iter().map(|p| p.id.clone()).collect::<Vec<_>>())
            .await;
        assert_eq!(ids, vec!["4", "3", "2", "1", "0"]);
    }

    #[tokio::test]
    async fn test_failed_mutation_is_not_persisted() {
        let backend = InMemorySnapshotBackend::new();
        let store = DocumentStore::new(Box::new(backend.clone()));

        let result: Result<(), DomainError> = store
            .mutate(|s| {
                s.posts.insert(0, post("1", "t"));
                Err(DomainError::not_found("post", "1"))
            })
            .await;
        assert!(result.is_err());
        assert!(backend.read(POSTS_COLLECTION).await.unwrap().is_none());
    }
}
