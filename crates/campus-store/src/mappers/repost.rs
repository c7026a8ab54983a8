//! Repost entity <-> record mapper

use campus_core::entities::Repost;
use campus_core::value_objects::RecordId;

use crate::models::RepostRecord;

use super::{datetime_to_millis, millis_to_datetime};

impl From<RepostRecord> for Repost {
    fn from(record: RepostRecord) -> Self {
        Repost {
            id: RecordId::new(record.id),
            user_id: RecordId::new(record.user_id),
            original_post_id: RecordId::new(record.original_post_id),
            commentary: if record.content.is_empty() {
                None
            } else {
                Some(record.content)
            },
            created_at: millis_to_datetime(record.timestamp),
        }
    }
}

impl RepostRecord {
    /// Build a stored record from an entity.
    pub fn from_entity(repost: &Repost) -> Self {
        Self {
            id: repost.id.as_str().to_string(),
            user_id: repost.user_id.as_str().to_string(),
            original_post_id: repost.original_post_id.as_str().to_string(),
            content: repost.commentary.clone().unwrap_or_default(),
            timestamp: datetime_to_millis(repost.created_at),
        }
    }
}
