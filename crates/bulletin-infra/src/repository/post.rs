//! Post repository over the document store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use bulletin_core::domain::{
    Attachment, FileUpload, FileView, IdGenerator, NewPost, PageInfo, Post, PostDetail, PostPage,
    PostPatch, PostQuery, PostView, validate,
};
use bulletin_core::error::DomainError;
use bulletin_core::ports::PostRepository;

use crate::codec;
use crate::store::DocumentStore;

use super::comments_for;

/// Listing defaults and bounds.
const DEFAULT_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 100;

/// Upload constraints.
const MAX_FILES_PER_POST: usize = 10;
const MAX_FILE_BYTES: usize = 50 * 1024 * 1024;
const ALLOWED_FILE_TYPES: &[&str] = &[
    "jpeg", "jpg", "png", "gif", "pdf", "doc", "docx", "txt", "zip", "mp4", "webm",
];

/// Post repository backed by the shared [`DocumentStore`].
pub struct StorePostRepository {
    store: Arc<DocumentStore>,
    ids: Arc<IdGenerator>,
}

impl StorePostRepository {
    pub fn new(store: Arc<DocumentStore>, ids: Arc<IdGenerator>) -> Self {
        Self { store, ids }
    }
}

#[async_trait]
impl PostRepository for StorePostRepository {
    async fn list(&self, query: PostQuery) -> Result<PostPage, DomainError> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query
            .per_page
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        self.store
            .read(|state| {
                let matched: Vec<&Post> = state
                    .posts
                    .iter()
                    .filter(|p| match &search {
                        Some(term) => {
                            p.title.to_lowercase().contains(term)
                                || p.content.to_lowercase().contains(term)
                        }
                        None => true,
                    })
                    .collect();

                let total_items = matched.len();
                let total_pages = total_items.div_ceil(per_page as usize) as u32;
                let start = (page as usize - 1) * per_page as usize;
                let items = matched
                    .into_iter()
                    .skip(start)
                    .take(per_page as usize)
                    .map(|p| p.preview(comments_for(state, &p.id).count()))
                    .collect();

                Ok(PostPage {
                    items,
                    pagination: PageInfo {
                        current_page: page,
                        total_pages,
                        total_items,
                        items_per_page: per_page,
                    },
                })
            })
            .await
    }

    async fn get(&self, id: &str) -> Result<PostDetail, DomainError> {
        self.store
            .read(|state| {
                let post = state
                    .posts
                    .iter()
                    .find(|p| p.id == id)
                    .ok_or_else(|| DomainError::not_found("post", id))?;
                Ok(PostDetail {
                    post: post.clone(),
                    comments: comments_for(state, id).cloned().collect(),
                })
            })
            .await
    }

    async fn create(&self, draft: NewPost, author: &str) -> Result<PostView, DomainError> {
        validate::require("title", &draft.title)?;
        validate::require("content", &draft.content)?;
        let files = encode_files(draft.files)?;

        let post = Post::new(
            self.ids.next_id(),
            validate::sanitize(&draft.title),
            validate::sanitize(&draft.content),
            author.to_string(),
            files,
        );
        let view = post.view();

        self.store
            .mutate(|state| {
                state.posts.insert(0, post);
                Ok(())
            })
            .await?;

        tracing::info!(
            id = %view.id,
            author = %view.author,
            files = view.files.len(),
            "post created"
        );
        Ok(view)
    }

    async fn update(&self, id: &str, patch: PostPatch) -> Result<PostView, DomainError> {
        // An empty field is treated as omitted, so a caller re-sending a
        // half-filled form never blanks out a post.
        let title = patch.title.filter(|t| !t.trim().is_empty());
        let content = patch.content.filter(|c| !c.trim().is_empty());
        let files = match patch.files.filter(|f| !f.is_empty()) {
            Some(uploads) => Some(encode_files(uploads)?),
            None => None,
        };

        let view = self
            .store
            .mutate(|state| {
                let post = state
                    .posts
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or_else(|| DomainError::not_found("post", id))?;

                if let Some(title) = title {
                    post.title = validate::sanitize(&title);
                }
                if let Some(content) = content {
                    post.content = validate::sanitize(&content);
                }
                if let Some(files) = files {
                    post.files = files;
                }
                post.updated_at = Some(Utc::now());
                Ok(post.view())
            })
            .await?;

        tracing::info!(id = %view.id, "post updated");
        Ok(view)
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let removed_comments = self
            .store
            .mutate(|state| {
                let index = state
                    .posts
                    .iter()
                    .position(|p| p.id == id)
                    .ok_or_else(|| DomainError::not_found("post", id))?;
                state.posts.remove(index);

                // Cascade: the comments go in the same persisted snapshot.
                let before = state.comments.len();
                state.comments.retain(|c| c.post_id != id);
                Ok(before - state.comments.len())
            })
            .await?;

        tracing::info!(id, comments = removed_comments, "post deleted");
        Ok(())
    }

    async fn get_file(&self, post_id: &str, index: usize) -> Result<FileView, DomainError> {
        self.store
            .read(|state| {
                let post = state
                    .posts
                    .iter()
                    .find(|p| p.id == post_id)
                    .ok_or_else(|| DomainError::not_found("post", post_id))?;
                let file = post
                    .files
                    .get(index)
                    .ok_or_else(|| DomainError::not_found("file", format!("{post_id}/{index}")))?;

                // A snapshot edited by hand can hold a corrupt payload;
                // surface that as a malformed-encoding failure, not a
                // nonsense data URI.
                codec::decode(&file.content)?;

                Ok(FileView {
                    originalname: file.originalname.clone(),
                    mimetype: file.mimetype.clone(),
                    size: file.size,
                    data_url: codec::data_uri(&file.mimetype, &file.content),
                })
            })
            .await
    }
}

/// Validate and encode a batch of uploads into stored attachments.
fn encode_files(uploads: Vec<FileUpload>) -> Result<Vec<Attachment>, DomainError> {
    if uploads.len() > MAX_FILES_PER_POST {
        return Err(DomainError::Validation(format!(
            "at most {MAX_FILES_PER_POST} files per post"
        )));
    }
    uploads.into_iter().map(encode_file).collect()
}

fn encode_file(upload: FileUpload) -> Result<Attachment, DomainError> {
    if upload.bytes.len() > MAX_FILE_BYTES {
        return Err(DomainError::Validation(format!(
            "{}: file exceeds {} bytes",
            upload.originalname, MAX_FILE_BYTES
        )));
    }
    if !has_allowed_extension(&upload.originalname) {
        return Err(DomainError::Validation(format!(
            "{}: file type not allowed (expected one of {})",
            upload.originalname,
            ALLOWED_FILE_TYPES.join(", ")
        )));
    }

    Ok(Attachment {
        originalname: upload.originalname,
        mimetype: upload.mimetype,
        size: upload.bytes.len() as u64,
        content: codec::encode(&upload.bytes),
    })
}

fn has_allowed_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_lowercase();
            ALLOWED_FILE_TYPES.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
