//! User entity <-> record mapper

use campus_core::entities::{User, UserRole};
use campus_core::value_objects::RecordId;

use crate::models::UserRecord;

use super::{datetime_to_millis, millis_to_datetime};

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User {
            id: RecordId::new(record.id),
            student_id: record.student_id,
            nickname: record.nickname,
            bio: record.bio,
            avatar: record.avatar,
            tags: record.tags,
            following: record.following.into_iter().map(RecordId::new).collect(),
            banned: record.is_banned,
            role: UserRole::from_str_lossy(&record.role),
            last_active_at: record.last_active_time.map(millis_to_datetime),
        }
    }
}

impl UserRecord {
    /// Build a stored record from an entity plus its password hash.
    pub fn from_entity(user: &User, password_hash: &str) -> Self {
        Self {
            id: user.id.as_str().to_string(),
            student_id: user.student_id.clone(),
            password: password_hash.to_string(),
            avatar: user.avatar.clone(),
            nickname: user.nickname.clone(),
            bio: user.bio.clone(),
            tags: user.tags.clone(),
            following: user
                .following
                .iter()
                .map(|id| id.as_str().to_string())
                .collect(),
            is_banned: user.banned,
            role: user.role.as_str().to_string(),
            last_active_time: user.last_active_at.map(datetime_to_millis),
        }
    }

    /// Overwrite the entity-owned fields, keeping the stored password hash.
    pub fn apply_entity(&mut self, user: &User) {
        let password = std::mem::take(&mut self.password);
        *self = Self::from_entity(user, &password);
    }
}
