//! Group entity - a member-run interest circle

use chrono::{DateTime, Utc};

use crate::value_objects::RecordId;

/// Group entity. The creator is a member from the moment of creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub avatar: String,
    pub creator_id: RecordId,
    pub members: Vec<RecordId>,
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Create a new Group with the creator as its first member.
    pub fn new(id: RecordId, name: String, creator_id: RecordId) -> Self {
        Self {
            id,
            name,
            description: String::new(),
            avatar: String::new(),
            members: vec![creator_id.clone()],
            creator_id,
            created_at: Utc::now(),
        }
    }

    /// Check whether a user belongs to the group.
    #[inline]
    pub fn is_member(&self, user_id: &RecordId) -> bool {
        self.members.contains(user_id)
    }

    /// Check whether a user created the group.
    #[inline]
    pub fn is_creator(&self, user_id: &RecordId) -> bool {
        &self.creator_id == user_id
    }

    /// Number of members.
    #[inline]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Add a member. Returns `false` if already a member.
    pub fn add_member(&mut self, user_id: RecordId) -> bool {
        if self.is_member(&user_id) {
            return false;
        }
        self.members.push(user_id);
        true
    }

    /// Remove a member. Returns `false` if not a member.
    pub fn remove_member(&mut self, user_id: &RecordId) -> bool {
        let before = self.members.len();
        self.members.retain(|id| id != user_id);
        self.members.len() != before
    }

    /// Case-insensitive keyword match against name and description.
    #[must_use]
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.name.to_lowercase().contains(&keyword)
            || self.description.to_lowercase().contains(&keyword)
    }
}
