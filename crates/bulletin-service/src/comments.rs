//! Comment boundary operations. Creation and listing are open to anonymous
//! visitors; deletion requires the admin credential.

use bulletin_core::domain::{Comment, NewComment};
use bulletin_shared::dto::CreateCommentRequest;

use crate::error::AppResult;
use crate::state::AppState;

/// All comments under a post, oldest first.
pub async fn list_comments(state: &AppState, post_id: &str) -> AppResult<Vec<Comment>> {
    Ok(state.comments.list_for_post(post_id).await?)
}

/// Leave a comment under an existing post.
pub async fn create_comment(
    state: &AppState,
    post_id: &str,
    req: CreateCommentRequest,
) -> AppResult<Comment> {
    Ok(state
        .comments
        .create(
            post_id,
            NewComment {
                name: req.name,
                email: req.email,
                message: req.message,
            },
        )
        .await?)
}

/// Remove a comment as the authenticated admin.
pub async fn delete_comment(state: &AppState, token: &str, id: &str) -> AppResult<()> {
    state.gate.authenticate(token)?;
    Ok(state.comments.delete(id).await?)
}
