//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use campus_core::entities::{Checkin, Comment, Group, Post, User};
use campus_core::stats::{TagCount, YearStats};

use super::responses::{
    CheckinResponse, CommentResponse, CurrentUserResponse, GroupResponse, PostResponse,
    TagCountResponse, UserResponse, YearStatsResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            nickname: user.nickname.clone(),
            bio: user.bio.clone(),
            avatar: user.avatar.clone(),
            tags: user.tags.clone(),
            following_count: user.following.len(),
            role: user.role.as_str().to_string(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            student_id: user.student_id.clone(),
            nickname: user.nickname.clone(),
            bio: user.bio.clone(),
            avatar: user.avatar.clone(),
            tags: user.tags.clone(),
            following: user.following.iter().map(ToString::to_string).collect(),
            banned: user.banned,
            role: user.role.as_str().to_string(),
            last_active_at: user.last_active_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            author_id: post.author_id.to_string(),
            content: post.content.clone(),
            images: post.images.clone(),
            tags: post.tags.clone(),
            likes: post.likes,
            visibility: post.visibility.as_str().to_string(),
            group_id: post.group_id.as_ref().map(ToString::to_string),
            repost_of: post.repost_of.as_ref().map(ToString::to_string),
            created_at: post.created_at,
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self::from(&post)
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            author_id: comment.author_id.to_string(),
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(&comment)
    }
}

// ============================================================================
// Group Mappers
// ============================================================================

impl From<&Group> for GroupResponse {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.to_string(),
            name: group.name.clone(),
            description: group.description.clone(),
            avatar: group.avatar.clone(),
            creator_id: group.creator_id.to_string(),
            members: group.members.iter().map(ToString::to_string).collect(),
            member_count: group.member_count(),
            created_at: group.created_at,
        }
    }
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self::from(&group)
    }
}

// ============================================================================
// Check-in Mappers
// ============================================================================

impl From<&Checkin> for CheckinResponse {
    fn from(checkin: &Checkin) -> Self {
        Self {
            id: checkin.id.to_string(),
            user_id: checkin.user_id.to_string(),
            note: checkin.note.clone(),
            created_at: checkin.created_at,
        }
    }
}

impl From<Checkin> for CheckinResponse {
    fn from(checkin: Checkin) -> Self {
        Self::from(&checkin)
    }
}

// ============================================================================
// Stats Mappers
// ============================================================================

impl From<&TagCount> for TagCountResponse {
    fn from(tc: &TagCount) -> Self {
        Self {
            tag: tc.tag.clone(),
            count: tc.count,
        }
    }
}

impl From<&YearStats> for YearStatsResponse {
    fn from(stats: &YearStats) -> Self {
        Self {
            year: stats.year,
            posts_count: stats.posts_count,
            comments_count: stats.comments_count,
            checkins_count: stats.checkins_count,
            total_likes: stats.total_likes,
            top_tags: stats.top_tags.iter().map(TagCountResponse::from).collect(),
            most_active_month: stats.most_active_month,
        }
    }
}

impl From<YearStats> for YearStatsResponse {
    fn from(stats: YearStats) -> Self {
        Self::from(&stats)
    }
}
