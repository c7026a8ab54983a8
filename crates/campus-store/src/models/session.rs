//! Session-state stored records

use serde::{Deserialize, Serialize};

/// Stored shape of the pending two-step registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRegistrationRecord {
    pub student_id: String,
    pub nickname: String,
    pub password: String,
}
