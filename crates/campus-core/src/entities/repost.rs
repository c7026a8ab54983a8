//! Repost entity - a record linking a reposting user to the original post

use chrono::{DateTime, Utc};

use crate::value_objects::RecordId;

/// Repost entity. The derived feed post is a separate [`super::Post`] whose
/// `repost_of` references the original; this record is the durable link
/// used for counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repost {
    pub id: RecordId,
    pub user_id: RecordId,
    pub original_post_id: RecordId,
    pub commentary: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Repost {
    /// Create a new Repost.
    pub fn new(
        id: RecordId,
        user_id: RecordId,
        original_post_id: RecordId,
        commentary: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            original_post_id,
            commentary,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repost_creation() {
        let repost = Repost::new(
            RecordId::new("r_1"),
            RecordId::new("u_1"),
            RecordId::new("p_1"),
            Some("worth a read".to_string()),
        );
        assert_eq!(repost.original_post_id, RecordId::new("p_1"));
        assert_eq!(repost.commentary.as_deref(), Some("worth a read"));
    }
}
