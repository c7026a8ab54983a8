//! Comment entity - a reply attached to a post

use chrono::{DateTime, Utc};

use crate::value_objects::RecordId;

/// Comment entity. Lives and dies with its parent post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: RecordId,
    pub post_id: RecordId,
    pub author_id: RecordId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment.
    pub fn new(id: RecordId, post_id: RecordId, author_id: RecordId, content: String) -> Self {
        Self {
            id,
            post_id,
            author_id,
            content,
            created_at: Utc::now(),
        }
    }

    /// Check whether the given user authored this comment.
    #[inline]
    pub fn is_author(&self, user_id: &RecordId) -> bool {
        &self.author_id == user_id
    }
}
