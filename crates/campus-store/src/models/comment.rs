//! Comment stored record

use serde::{Deserialize, Serialize};

/// Stored shape of a comment. `userId` is the comment author.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub content: String,
    pub timestamp: i64,
}
