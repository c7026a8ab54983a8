//! Repost stored record

use serde::{Deserialize, Serialize};

/// Stored shape of a repost link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepostRecord {
    pub id: String,
    pub user_id: String,
    pub original_post_id: String,
    #[serde(default)]
    pub content: String,
    pub timestamp: i64,
}
