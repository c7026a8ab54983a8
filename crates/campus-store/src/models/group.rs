//! Group stored record

use serde::{Deserialize, Serialize};

/// Stored shape of a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub avatar: String,
    pub creator_id: String,
    #[serde(default)]
    pub members: Vec<String>,
    pub created_at: i64,
}
