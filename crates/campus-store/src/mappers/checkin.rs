//! Check-in entity <-> record mapper

use campus_core::entities::Checkin;
use campus_core::value_objects::RecordId;

use crate::models::CheckinRecord;

use super::{datetime_to_millis, millis_to_datetime};

impl From<CheckinRecord> for Checkin {
    fn from(record: CheckinRecord) -> Self {
        Checkin {
            id: RecordId::new(record.id),
            user_id: RecordId::new(record.user_id),
            // An empty stored note means "no note"
            note: if record.content.is_empty() {
                None
            } else {
                Some(record.content)
            },
            created_at: millis_to_datetime(record.timestamp),
        }
    }
}

impl CheckinRecord {
    /// Build a stored record from an entity.
    pub fn from_entity(checkin: &Checkin) -> Self {
        Self {
            id: checkin.id.as_str().to_string(),
            user_id: checkin.user_id.as_str().to_string(),
            content: checkin.note.clone().unwrap_or_default(),
            timestamp: datetime_to_millis(checkin.created_at),
        }
    }
}
