//! User entity - represents a campus network account

use chrono::{DateTime, Utc};

use crate::value_objects::RecordId;

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    /// String form used in persisted records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Parse the persisted string form; unknown values fall back to `User`.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "admin" => Self::Admin,
            _ => Self::User,
        }
    }
}

/// User entity.
///
/// The student id is the login key; the record id is the stable identifier
/// everything else references. Accounts are never hard-deleted, only banned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub student_id: String,
    pub nickname: String,
    pub bio: String,
    pub avatar: String,
    pub tags: Vec<String>,
    pub following: Vec<RecordId>,
    pub banned: bool,
    pub role: UserRole,
    pub last_active_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new User with required fields; everything else defaults.
    pub fn new(id: RecordId, student_id: String, nickname: String) -> Self {
        Self {
            id,
            student_id,
            nickname,
            bio: String::new(),
            avatar: String::new(),
            tags: Vec::new(),
            following: Vec::new(),
            banned: false,
            role: UserRole::User,
            last_active_at: None,
        }
    }

    /// Check if this account has the admin role.
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Check if this user follows another user.
    #[inline]
    pub fn is_following(&self, user_id: &RecordId) -> bool {
        self.following.contains(user_id)
    }

    /// Start following another user.
    ///
    /// Returns `false` without modifying anything for a self-follow or an
    /// id already in the following list, keeping the list free of
    /// duplicates and of the user's own id.
    pub fn follow(&mut self, user_id: RecordId) -> bool {
        if user_id == self.id || self.is_following(&user_id) {
            return false;
        }
        self.following.push(user_id);
        true
    }

    /// Stop following another user. Returns `false` if not followed.
    pub fn unfollow(&mut self, user_id: &RecordId) -> bool {
        let before = self.following.len();
        self.following.retain(|id| id != user_id);
        self.following.len() != before
    }

    /// Record activity at the given instant.
    pub fn touch_active(&mut self, at: DateTime<Utc>) {
        self.last_active_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::new(
            RecordId::new("u_1"),
            "20230001".to_string(),
            "library cat".to_string(),
        )
    }

    #[test]
    fn test_user_defaults() {
        let user = sample();
        assert!(!user.banned);
        assert_eq!(user.role, UserRole::User);
        assert!(user.following.is_empty());
        assert!(user.last_active_at.is_none());
    }

    #[test]
    fn test_follow_rejects_self() {
        let mut user = sample();
        assert!(!user.follow(RecordId::new("u_1")));
        assert!(user.following.is_empty());
    }

    #[test]
    fn test_follow_deduplicates() {
        let mut user = sample();
        assert!(user.follow(RecordId::new("u_2")));
        assert!(!user.follow(RecordId::new("u_2")));
        assert_eq!(user.following.len(), 1);
    }

    #[test]
    fn test_unfollow() {
        let mut user = sample();
        user.follow(RecordId::new("u_2"));
        assert!(user.unfollow(&RecordId::new("u_2")));
        assert!(!user.unfollow(&RecordId::new("u_2")));
        assert!(user.following.is_empty());
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!(UserRole::from_str_lossy("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_str_lossy("user"), UserRole::User);
        assert_eq!(UserRole::from_str_lossy("moderator"), UserRole::User);
        assert_eq!(UserRole::Admin.as_str(), "admin");
    }
}
