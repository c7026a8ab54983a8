//! Request DTOs for service operations
//!
//! All request DTOs implement `Deserialize`; those with field constraints
//! also implement `Validate`.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Step one of registration: credentials and nickname
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Student id is required"))]
    pub student_id: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(min = 1, message = "Password confirmation is required"))]
    pub confirm_password: String,

    #[validate(length(min = 1, max = 30, message = "Nickname must be 1-30 characters"))]
    pub nickname: String,
}

/// Step two of registration: interest tags and avatar
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CompleteRegistrationRequest {
    pub tags: Vec<String>,
    pub avatar: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Student id is required"))]
    pub student_id: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[serde(default)]
    pub remember_me: bool,
}

// ============================================================================
// User Requests
// ============================================================================

/// Explicit profile update; absent fields stay untouched
#[derive(Debug, Clone, Deserialize, Default, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 30, message = "Nickname must be 1-30 characters"))]
    pub nickname: Option<String>,

    #[validate(length(max = 200, message = "Bio must be at most 200 characters"))]
    pub bio: Option<String>,

    pub avatar: Option<String>,

    pub tags: Option<Vec<String>>,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Publish a post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,

    #[serde(default)]
    pub images: Vec<String>,

    /// "public" (default) or "friends"
    pub visibility: Option<String>,

    /// Publish into a group the author belongs to
    pub group_id: Option<String>,
}

/// Explicit post edit; absent fields stay untouched
#[derive(Debug, Clone, Deserialize, Default, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: Option<String>,

    pub images: Option<Vec<String>>,

    pub visibility: Option<String>,
}

/// Feed tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedTab {
    #[default]
    Recommended,
    Following,
}

/// Feed query: tab plus optional keyword over content and tags
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedQuery {
    #[serde(default)]
    pub tab: FeedTab,
    pub keyword: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Add a comment to a post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 500, message = "Comment must be 1-500 characters"))]
    pub content: String,
}

// ============================================================================
// Group Requests
// ============================================================================

/// Create a group
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGroupRequest {
    #[validate(length(min = 1, max = 50, message = "Group name must be 1-50 characters"))]
    pub name: String,

    #[validate(length(max = 200, message = "Description must be at most 200 characters"))]
    pub description: Option<String>,

    pub avatar: Option<String>,
}

// ============================================================================
// Repost Requests
// ============================================================================

/// Repost an existing post with optional commentary
#[derive(Debug, Clone, Deserialize, Default, Validate)]
pub struct RepostRequest {
    #[validate(length(max = 500, message = "Commentary must be at most 500 characters"))]
    pub commentary: Option<String>,
}

// ============================================================================
// Check-in Requests
// ============================================================================

/// Daily check-in with optional note
#[derive(Debug, Clone, Deserialize, Default, Validate)]
pub struct CheckinRequest {
    #[validate(length(max = 200, message = "Note must be at most 200 characters"))]
    pub note: Option<String>,
}
