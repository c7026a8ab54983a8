//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern: the domain layer defines what
//! it needs, the storage layer provides the implementation. Every port can
//! be backed by the file store or by an in-memory store in tests.

use async_trait::async_trait;

use crate::entities::{Checkin, Comment, Group, Post, Repost, User};
use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<User>>;

    /// Find user by student id (the login key)
    async fn find_by_student_id(&self, student_id: &str) -> RepoResult<Option<User>>;

    /// Check if a student id is already registered
    async fn student_id_exists(&self, student_id: &str) -> RepoResult<bool>;

    /// List all users
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Create a new user with its password hash
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update an existing user (password hash untouched)
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: &RecordId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Post>>;

    /// List all posts, newest first
    async fn list(&self) -> RepoResult<Vec<Post>>;

    /// List a user's posts, newest first
    async fn find_by_author(&self, author_id: &RecordId) -> RepoResult<Vec<Post>>;

    /// List a group's posts, newest first
    async fn find_by_group(&self, group_id: &RecordId) -> RepoResult<Vec<Post>>;

    /// Create a new post (inserted at the head of the stored list)
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Update an existing post
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post. Comment cleanup is the service's job.
    async fn delete(&self, id: &RecordId) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Comment>>;

    /// List comments for a post, newest first
    async fn find_by_post(&self, post_id: &RecordId) -> RepoResult<Vec<Comment>>;

    /// List comments authored by a user
    async fn find_by_author(&self, author_id: &RecordId) -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a single comment
    async fn delete(&self, id: &RecordId) -> RepoResult<()>;

    /// Delete all comments for a post; returns how many were removed
    async fn delete_by_post(&self, post_id: &RecordId) -> RepoResult<u64>;
}

// ============================================================================
// Group Repository
// ============================================================================

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Find group by ID
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Group>>;

    /// List all groups
    async fn list(&self) -> RepoResult<Vec<Group>>;

    /// List groups a user is a member of
    async fn find_by_member(&self, user_id: &RecordId) -> RepoResult<Vec<Group>>;

    /// Create a new group
    async fn create(&self, group: &Group) -> RepoResult<()>;

    /// Update an existing group (membership changes included)
    async fn update(&self, group: &Group) -> RepoResult<()>;
}

// ============================================================================
// Check-in Repository
// ============================================================================

#[async_trait]
pub trait CheckinRepository: Send + Sync {
    /// List a user's check-ins, newest first
    async fn find_by_user(&self, user_id: &RecordId) -> RepoResult<Vec<Checkin>>;

    /// Record a check-in (inserted at the head of the user's list)
    async fn create(&self, checkin: &Checkin) -> RepoResult<()>;
}

// ============================================================================
// Favorite Repository
// ============================================================================

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Post ids a user has favorited, in insertion order
    async fn list_for_user(&self, user_id: &RecordId) -> RepoResult<Vec<RecordId>>;

    /// Check whether a user has favorited a post
    async fn contains(&self, user_id: &RecordId, post_id: &RecordId) -> RepoResult<bool>;

    /// Add a post to a user's favorites (no-op when already present)
    async fn add(&self, user_id: &RecordId, post_id: &RecordId) -> RepoResult<()>;

    /// Remove a post from a user's favorites (no-op when absent)
    async fn remove(&self, user_id: &RecordId, post_id: &RecordId) -> RepoResult<()>;
}

// ============================================================================
// Repost Repository
// ============================================================================

#[async_trait]
pub trait RepostRepository: Send + Sync {
    /// Record a repost
    async fn create(&self, repost: &Repost) -> RepoResult<()>;

    /// How many times a post has been reposted
    async fn count_for_post(&self, post_id: &RecordId) -> RepoResult<u64>;

    /// List reposts made by a user
    async fn find_by_user(&self, user_id: &RecordId) -> RepoResult<Vec<Repost>>;
}

// ============================================================================
// Session Repository
// ============================================================================

/// Intermediate record of the two-step registration flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRegistration {
    pub student_id: String,
    pub nickname: String,
    pub password_hash: String,
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// The logged-in user's id, if any
    async fn current_user_id(&self) -> RepoResult<Option<RecordId>>;

    /// Set or clear the logged-in user's id
    async fn set_current_user_id(&self, user_id: Option<&RecordId>) -> RepoResult<()>;

    /// Student id remembered from a "remember me" login
    async fn remembered_student_id(&self) -> RepoResult<Option<String>>;

    /// Set or clear the remembered student id
    async fn set_remembered_student_id(&self, student_id: Option<&str>) -> RepoResult<()>;

    /// The pending two-step registration, if one is in progress
    async fn pending_registration(&self) -> RepoResult<Option<PendingRegistration>>;

    /// Store or clear the pending registration
    async fn set_pending_registration(
        &self,
        pending: Option<&PendingRegistration>,
    ) -> RepoResult<()>;
}

// ============================================================================
// Preference Repository
// ============================================================================

/// Display theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// String form used in the persisted preference entry
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse the persisted string form
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// The saved display theme, if one was chosen
    async fn theme(&self) -> RepoResult<Option<Theme>>;

    /// Save or clear the display theme
    async fn set_theme(&self, theme: Option<Theme>) -> RepoResult<()>;
}

// ============================================================================
// Visit Repository
// ============================================================================

#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Bump a user's profile visit counter; returns the new count
    async fn increment(&self, user_id: &RecordId) -> RepoResult<u64>;

    /// A user's profile visit count
    async fn count(&self, user_id: &RecordId) -> RepoResult<u64>;
}
