//! User stored record

use serde::{Deserialize, Serialize};

/// Stored shape of a user, camelCase to match the persisted data set.
/// The password hash lives here, not on the entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub student_id: String,
    pub password: String,
    #[serde(default)]
    pub avatar: String,
    pub nickname: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub following: Vec<String>,
    #[serde(default)]
    pub is_banned: bool,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active_time: Option<i64>,
}

fn default_role() -> String {
    "user".to_string()
}
