//! Value objects for the campus domain

mod record_id;

pub use record_id::{RecordId, RecordIdGenerator, RecordKind};
