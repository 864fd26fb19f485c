use async_trait::async_trait;

use crate::domain::{
    Comment, FileView, NewComment, NewPost, PostDetail, PostPage, PostPatch, PostQuery, PostView,
};
use crate::error::DomainError;

/// Post repository: CRUD plus search and pagination over the posts collection.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// One page of previews, newest first, optionally filtered by a
    /// case-insensitive substring match over title and content.
    async fn list(&self, query: PostQuery) -> Result<PostPage, DomainError>;

    /// Full record including attachment payloads, with comments nested
    /// oldest first.
    async fn get(&self, id: &str) -> Result<PostDetail, DomainError>;

    /// Create a post authored by the given identity. The returned view has
    /// attachment payloads stripped.
    async fn create(&self, draft: NewPost, author: &str) -> Result<PostView, DomainError>;

    /// Partial update; omitted fields retain their prior value.
    async fn update(&self, id: &str, patch: PostPatch) -> Result<PostView, DomainError>;

    /// Remove the post and every comment referencing it, in one persisted
    /// transition.
    async fn delete(&self, id: &str) -> Result<(), DomainError>;

    /// Data-URI view of one attachment by zero-based position. An
    /// out-of-range index is NotFound, not a failure.
    async fn get_file(&self, post_id: &str, index: usize) -> Result<FileView, DomainError>;
}

/// Comment repository, scoped to a parent post.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// All comments for a post in insertion order (oldest first). Empty if
    /// none, even when the post itself does not exist.
    async fn list_for_post(&self, post_id: &str) -> Result<Vec<Comment>, DomainError>;

    /// Create a comment under an existing post.
    async fn create(&self, post_id: &str, comment: NewComment) -> Result<Comment, DomainError>;

    /// Remove a single comment by id.
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}
