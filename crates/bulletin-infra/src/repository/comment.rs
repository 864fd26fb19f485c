//! Comment repository over the document store.

use std::sync::Arc;

use async_trait::async_trait;

use bulletin_core::domain::{Comment, IdGenerator, NewComment, validate};
use bulletin_core::error::DomainError;
use bulletin_core::ports::CommentRepository;

use crate::store::DocumentStore;

use super::comments_for;

/// Comment repository backed by the shared [`DocumentStore`].
pub struct StoreCommentRepository {
    store: Arc<DocumentStore>,
    ids: Arc<IdGenerator>,
}

impl StoreCommentRepository {
    pub fn new(store: Arc<DocumentStore>, ids: Arc<IdGenerator>) -> Self {
        Self { store, ids }
    }
}

#[async_trait]
impl CommentRepository for StoreCommentRepository {
    async fn list_for_post(&self, post_id: &str) -> Result<Vec<Comment>, DomainError> {
        self.store
            .read(|state| Ok(comments_for(state, post_id).cloned().collect()))
            .await
    }

    async fn create(&self, post_id: &str, comment: NewComment) -> Result<Comment, DomainError> {
        validate::require("name", &comment.name)?;
        validate::require("email", &comment.email)?;
        validate::require("message", &comment.message)?;
        validate::require_email(&comment.email)?;

        let record = Comment::new(
            self.ids.next_id(),
            post_id.to_string(),
            validate::sanitize(&comment.name),
            validate::sanitize(&comment.email),
            validate::sanitize(&comment.message),
        );

        let created = self
            .store
            .mutate(|state| {
                if !state.posts.iter().any(|p| p.id == post_id) {
                    return Err(DomainError::not_found("post", post_id));
                }
                // Append so display order stays chronological.
                state.comments.push(record.clone());
                Ok(record)
            })
            .await?;

        tracing::info!(id = %created.id, post_id = %created.post_id, "comment created");
        Ok(created)
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.store
            .mutate(|state| {
                let index = state
                    .comments
                    .iter()
                    .position(|c| c.id == id)
                    .ok_or_else(|| DomainError::not_found("comment", id))?;
                state.comments.remove(index);
                Ok(())
            })
            .await?;

        tracing::info!(id, "comment deleted");
        Ok(())
    }
}
