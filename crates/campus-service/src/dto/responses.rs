//! Response DTOs for service operations
//!
//! All response DTOs implement `Serialize`. Record ids serialize as plain
//! strings.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// User Responses
// ============================================================================

/// Public user response (what any visitor sees)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub nickname: String,
    pub bio: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub avatar: String,
    pub tags: Vec<String>,
    pub following_count: usize,
    pub role: String,
}

/// Current authenticated user response (includes the student id)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub student_id: String,
    pub nickname: String,
    pub bio: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub avatar: String,
    pub tags: Vec<String>,
    pub following: Vec<String>,
    pub banned: bool,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_active_at: Option<DateTime<Utc>>,
}

/// A user ranked by activity for the sidebar
#[derive(Debug, Clone, Serialize)]
pub struct ActiveUserResponse {
    pub user: UserResponse,
    pub post_count: usize,
}

// ============================================================================
// Post Responses
// ============================================================================

/// Post response
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub author_id: String,
    pub content: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub likes: i64,
    pub visibility: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repost_of: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Tag with its usage count (hot topics, recap top tags)
#[derive(Debug, Clone, Serialize)]
pub struct TagCountResponse {
    pub tag: String,
    pub count: u32,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment response
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Group Responses
// ============================================================================

/// Group response
#[derive(Debug, Clone, Serialize)]
pub struct GroupResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub avatar: String,
    pub creator_id: String,
    pub members: Vec<String>,
    pub member_count: usize,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Repost Responses
// ============================================================================

/// Result of a repost: the durable link and the derived feed post
#[derive(Debug, Clone, Serialize)]
pub struct RepostResponse {
    pub id: String,
    pub user_id: String,
    pub original_post_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub post: PostResponse,
}

// ============================================================================
// Check-in Responses
// ============================================================================

/// A single check-in
#[derive(Debug, Clone, Serialize)]
pub struct CheckinResponse {
    pub id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Result of checking in: the record plus the updated streak
#[derive(Debug, Clone, Serialize)]
pub struct CheckinResult {
    pub checkin: CheckinResponse,
    pub streak: u32,
}

/// Check-in header numbers
#[derive(Debug, Clone, Serialize)]
pub struct CheckinSummaryResponse {
    pub total: usize,
    pub streak: u32,
    pub this_month: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_checkin_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Recap Responses
// ============================================================================

/// Yearly recap
#[derive(Debug, Clone, Serialize)]
pub struct YearStatsResponse {
    pub year: i32,
    pub posts_count: u32,
    pub comments_count: u32,
    pub checkins_count: u32,
    pub total_likes: i64,
    pub top_tags: Vec<TagCountResponse>,
    /// Calendar month 0-11; `None` when the year had no posts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_active_month: Option<u32>,
}
