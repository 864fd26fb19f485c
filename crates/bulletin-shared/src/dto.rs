//! Data Transfer Objects - request/response types for the boundary operations.

use serde::{Deserialize, Serialize};

/// Request to login as the configured admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// The authenticated admin as echoed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub username: String,
    pub role: String,
}

/// Response containing the issued credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: AdminUser,
}

/// One uploaded file as carried by a create or update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub originalname: String,
    pub mimetype: String,
    pub content: Vec<u8>,
}

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub files: Vec<UploadedFile>,
}

/// Partial update of a post. Omitted fields keep their prior value; a
/// non-empty `files` replaces the whole attachment list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub files: Option<Vec<UploadedFile>>,
}

/// Listing parameters for the posts collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub search: Option<String>,
}

/// Request to create a comment under a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}
