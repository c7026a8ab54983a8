//! Record to entity mappers
//!
//! - `From<Record> for Entity`: convert stored rows to domain objects
//! - `Record::from_entity`: prepare entity data for storage

mod checkin;
mod comment;
mod group;
mod post;
mod repost;
mod user;

use chrono::{DateTime, TimeZone, Utc};

/// Epoch milliseconds to `DateTime<Utc>`; out-of-range values clamp to epoch.
pub(crate) fn millis_to_datetime(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .unwrap_or_else(|| Utc.timestamp_millis_opt(0).unwrap())
}

/// `DateTime<Utc>` to epoch milliseconds.
pub(crate) fn datetime_to_millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}
