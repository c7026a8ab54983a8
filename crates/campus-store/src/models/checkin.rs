//! Check-in stored record

use serde::{Deserialize, Serialize};

/// Stored shape of a check-in. The note is stored as a plain string, empty
/// when the user left it blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinRecord {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub content: String,
    pub timestamp: i64,
}
