//! Post boundary operations. Mutations require a valid admin credential;
//! reads are open.

use bulletin_core::domain::{
    FileUpload, FileView, NewPost, PostDetail, PostPage, PostPatch, PostQuery, PostView,
};
use bulletin_shared::dto::{CreatePostRequest, ListPostsQuery, UpdatePostRequest, UploadedFile};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// List post previews with pagination and optional search.
pub async fn list_posts(state: &AppState, query: ListPostsQuery) -> AppResult<PostPage> {
    Ok(state
        .posts
        .list(PostQuery {
            page: query.page,
            per_page: query.limit,
            search: query.search,
        })
        .await?)
}

/// Full post with nested comments.
pub async fn get_post(state: &AppState, id: &str) -> AppResult<PostDetail> {
    Ok(state.posts.get(id).await?)
}

/// Create a post authored by the authenticated admin.
pub async fn create_post(
    state: &AppState,
    token: &str,
    req: CreatePostRequest,
) -> AppResult<PostView> {
    let identity = state.gate.authenticate(token)?;
    let draft = NewPost {
        title: req.title,
        content: req.content,
        files: req.files.into_iter().map(into_upload).collect(),
    };
    Ok(state.posts.create(draft, &identity.username).await?)
}

/// Partially update a post.
pub async fn update_post(
    state: &AppState,
    token: &str,
    id: &str,
    req: UpdatePostRequest,
) -> AppResult<PostView> {
    state.gate.authenticate(token)?;
    let patch = PostPatch {
        title: req.title,
        content: req.content,
        files: req
            .files
            .map(|files| files.into_iter().map(into_upload).collect()),
    };
    Ok(state.posts.update(id, patch).await?)
}

/// Delete a post and its comments.
pub async fn delete_post(state: &AppState, token: &str, id: &str) -> AppResult<()> {
    state.gate.authenticate(token)?;
    Ok(state.posts.delete(id).await?)
}

/// Data-URI view of one attachment. A negative or out-of-range index is
/// NotFound, never a failure.
pub async fn get_post_file(state: &AppState, post_id: &str, index: i64) -> AppResult<FileView> {
    let index = usize::try_from(index)
        .map_err(|_| AppError::NotFound(format!("file {post_id}/{index}")))?;
    Ok(state.posts.get_file(post_id, index).await?)
}

fn into_upload(file: UploadedFile) -> FileUpload {
    FileUpload {
        originalname: file.originalname,
        mimetype: file.mimetype,
        bytes: file.content,
    }
}
