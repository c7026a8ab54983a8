//! Post entity <-> record mapper

use campus_core::entities::{Post, Visibility};
use campus_core::value_objects::RecordId;

use crate::models::PostRecord;

use super::{datetime_to_millis, millis_to_datetime};

impl From<PostRecord> for Post {
    fn from(record: PostRecord) -> Self {
        Post {
            id: RecordId::new(record.id),
            author_id: RecordId::new(record.author_id),
            content: record.content,
            images: record.images,
            tags: record.tags,
            likes: record.likes.max(0),
            visibility: Visibility::from_str_lossy(&record.visibility),
            group_id: record.group_id.map(RecordId::new),
            repost_of: record.reposted_from.map(RecordId::new),
            created_at: millis_to_datetime(record.timestamp),
        }
    }
}

impl PostRecord {
    /// Build a stored record from an entity.
    pub fn from_entity(post: &Post) -> Self {
        Self {
            id: post.id.as_str().to_string(),
            author_id: post.author_id.as_str().to_string(),
            content: post.content.clone(),
            images: post.images.clone(),
            likes: post.likes,
            timestamp: datetime_to_millis(post.created_at),
            tags: post.tags.clone(),
            visibility: post.visibility.as_str().to_string(),
            group_id: post.group_id.as_ref().map(|id| id.as_str().to_string()),
            reposted_from: post.repost_of.as_ref().map(|id| id.as_str().to_string()),
        }
    }
}
