use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment entity - a visitor-submitted reply attached to exactly one post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment. Inputs are expected to be sanitized already.
    pub fn new(id: String, post_id: String, name: String, email: String, message: String) -> Self {
        Self {
            id,
            post_id,
            name,
            email,
            message,
            created_at: Utc::now(),
        }
    }
}

/// Input for creating a comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub name: String,
    pub email: String,
    pub message: String,
}
