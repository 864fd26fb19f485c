use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a published article with optional file attachments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub files: Vec<Attachment>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Binary file embedded in a post, payload stored as encoded text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub originalname: String,
    pub mimetype: String,
    /// Decoded byte length, not the encoded length.
    pub size: u64,
    pub content: String,
}

impl Post {
    /// Create a new post. Inputs are expected to be sanitized already.
    pub fn new(
        id: String,
        title: String,
        content: String,
        author: String,
        files: Vec<Attachment>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            author,
            files,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// List-view projection: payloads stripped, content truncated.
    pub fn preview(&self, comment_count: usize) -> PostPreview {
        PostPreview {
            id: self.id.clone(),
            title: self.title.clone(),
            content: self.content.chars().take(PREVIEW_CHARS).collect(),
            author: self.author.clone(),
            files: self.files.iter().map(AttachmentInfo::from).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            comment_count,
        }
    }

    /// Mutation-response projection: the full record with payloads stripped.
    pub fn view(&self) -> PostView {
        PostView {
            id: self.id.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            author: self.author.clone(),
            files: self.files.iter().map(AttachmentInfo::from).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// How much of the content a list preview carries.
const PREVIEW_CHARS: usize = 500;

/// Raw upload for a new attachment, before encoding.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub originalname: String,
    pub mimetype: String,
    pub bytes: Vec<u8>,
}

/// Input for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub files: Vec<FileUpload>,
}

/// Partial update of a post. `None` fields retain their prior value;
/// a non-empty `files` wholly replaces the attachment list.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub files: Option<Vec<FileUpload>>,
}

/// Listing parameters. Unset fields fall back to their defaults.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
}

/// Attachment metadata without the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentInfo {
    pub originalname: String,
    pub mimetype: String,
    pub size: u64,
}

impl From<&Attachment> for AttachmentInfo {
    fn from(file: &Attachment) -> Self {
        Self {
            originalname: file.originalname.clone(),
            mimetype: file.mimetype.clone(),
            size: file.size,
        }
    }
}

/// One post as it appears in a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPreview {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub files: Vec<AttachmentInfo>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub comment_count: usize,
}

/// A full post with payloads stripped, returned from mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub files: Vec<AttachmentInfo>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Pagination block accompanying a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: usize,
    pub items_per_page: u32,
}

/// One page of post previews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPage {
    pub items: Vec<PostPreview>,
    pub pagination: PageInfo,
}

/// A full post with its comments nested, as returned by `get`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub comments: Vec<super::Comment>,
}

/// Single-attachment retrieval view: a self-describing inline resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileView {
    pub originalname: String,
    pub mimetype: String,
    pub size: u64,
    pub data_url: String,
}
