//! Comment entity <-> record mapper

use campus_core::entities::Comment;
use campus_core::value_objects::RecordId;

use crate::models::CommentRecord;

use super::{datetime_to_millis, millis_to_datetime};

impl From<CommentRecord> for Comment {
    fn from(record: CommentRecord) -> Self {
        Comment {
            id: RecordId::new(record.id),
            post_id: RecordId::new(record.post_id),
            author_id: RecordId::new(record.user_id),
            content: record.content,
            created_at: millis_to_datetime(record.timestamp),
        }
    }
}

impl CommentRecord {
    /// Build a stored record from an entity.
    pub fn from_entity(comment: &Comment) -> Self {
        Self {
            id: comment.id.as_str().to_string(),
            post_id: comment.post_id.as_str().to_string(),
            user_id: comment.author_id.as_str().to_string(),
            content: comment.content.clone(),
            timestamp: datetime_to_millis(comment.created_at),
        }
    }
}
