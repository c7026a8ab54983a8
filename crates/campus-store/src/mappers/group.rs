//! Group entity <-> record mapper

use campus_core::entities::Group;
use campus_core::value_objects::RecordId;

use crate::models::GroupRecord;

use super::{datetime_to_millis, millis_to_datetime};

impl From<GroupRecord> for Group {
    fn from(record: GroupRecord) -> Self {
        Group {
            id: RecordId::new(record.id),
            name: record.name,
            description: record.description,
            avatar: record.avatar,
            creator_id: RecordId::new(record.creator_id),
            members: record.members.into_iter().map(RecordId::new).collect(),
            created_at: millis_to_datetime(record.created_at),
        }
    }
}

impl GroupRecord {
    /// Build a stored record from an entity.
    pub fn from_entity(group: &Group) -> Self {
        Self {
            id: group.id.as_str().to_string(),
            name: group.name.clone(),
            description: group.description.clone(),
            avatar: group.avatar.clone(),
            creator_id: group.creator_id.as_str().to_string(),
            members: group
                .members
                .iter()
                .map(|id| id.as_str().to_string())
                .collect(),
            created_at: datetime_to_millis(group.created_at),
        }
    }
}
