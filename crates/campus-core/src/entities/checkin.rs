//! Check-in entity - a daily attendance record

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::RecordId;

/// Check-in entity. At most one per user per calendar day; the same-day
/// lookup happens in the service before insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkin {
    pub id: RecordId,
    pub user_id: RecordId,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Checkin {
    /// Create a new Checkin stamped with the current time.
    pub fn new(id: RecordId, user_id: RecordId, note: Option<String>) -> Self {
        Self {
            id,
            user_id,
            note,
            created_at: Utc::now(),
        }
    }

    /// The UTC calendar day this check-in falls on.
    #[inline]
    pub fn calendar_day(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}
