//! Repository implementations over the document store.

mod comment;
mod post;

pub use comment::StoreCommentRepository;
pub use post::StorePostRepository;

use bulletin_core::domain::Comment;

use crate::store::Collections;

/// Comments for one post, in insertion order.
fn comments_for<'a>(state: &'a Collections, post_id: &str) -> impl Iterator<Item = &'a Comment> {
    let post_id = post_id.to_string();
    state.comments.iter().filter(move |c| c.post_id == post_id)
}
