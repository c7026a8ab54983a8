//! User service
//!
//! Profile lookups and edits, the follow graph, activity timestamps, and
//! profile visit counters.

use campus_core::entities::User;
use campus_core::value_objects::RecordId;
use chrono::{DateTime, Utc};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{ActiveUserResponse, CurrentUserResponse, UpdateProfileRequest, UserResponse};

use super::auth::MAX_PROFILE_TAGS;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a user's public profile
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: &RecordId) -> ServiceResult<UserResponse> {
        let user = self.get_user_entity(user_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// Get a user entity by id
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: &RecordId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }

    /// Apply an explicit field-by-field profile update
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: &RecordId,
        request: UpdateProfileRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let mut user = self.get_user_entity(user_id).await?;

        if let Some(nickname) = request.nickname {
            user.nickname = nickname;
        }
        if let Some(bio) = request.bio {
            user.bio = bio;
        }
        if let Some(avatar) = request.avatar {
            user.avatar = avatar;
        }
        if let Some(mut tags) = request.tags {
            tags.truncate(MAX_PROFILE_TAGS);
            user.tags = tags;
        }
        user.touch_active(Utc::now());

        self.ctx.user_repo().update(&user).await?;
        info!(user_id = %user_id, "Profile updated");
        Ok(CurrentUserResponse::from(&user))
    }

    /// Follow another user
    ///
    /// Following an already-followed user is a no-op; following yourself is
    /// an error.
    #[instrument(skip(self))]
    pub async fn follow(&self, follower_id: &RecordId, target_id: &RecordId) -> ServiceResult<()> {
        if follower_id == target_id {
            return Err(campus_core::DomainError::CannotFollowSelf.into());
        }

        let mut follower = self.get_user_entity(follower_id).await?;
        // The target must exist before it can be followed
        self.get_user_entity(target_id).await?;

        if follower.follow(target_id.clone()) {
            self.ctx.user_repo().update(&follower).await?;
            info!(follower = %follower_id, target = %target_id, "Followed");
        }
        Ok(())
    }

    /// Unfollow another user (no-op when not followed)
    #[instrument(skip(self))]
    pub async fn unfollow(
        &self,
        follower_id: &RecordId,
        target_id: &RecordId,
    ) -> ServiceResult<()> {
        let mut follower = self.get_user_entity(follower_id).await?;
        if follower.unfollow(target_id) {
            self.ctx.user_repo().update(&follower).await?;
            info!(follower = %follower_id, target = %target_id, "Unfollowed");
        }
        Ok(())
    }

    /// Record activity for a user right now
    #[instrument(skip(self))]
    pub async fn touch_last_active(&self, user_id: &RecordId) -> ServiceResult<()> {
        let mut user = self.get_user_entity(user_id).await?;
        user.touch_active(Utc::now());
        self.ctx.user_repo().update(&user).await?;
        Ok(())
    }

    /// When the user was last active, if known
    pub async fn last_active(&self, user_id: &RecordId) -> ServiceResult<Option<DateTime<Utc>>> {
        Ok(self.get_user_entity(user_id).await?.last_active_at)
    }

    /// Record a profile visit and return the updated count.
    ///
    /// Self-visits are not counted; they just report the current number.
    #[instrument(skip(self))]
    pub async fn record_profile_visit(
        &self,
        profile_user_id: &RecordId,
        viewer_id: Option<&RecordId>,
    ) -> ServiceResult<u64> {
        self.get_user_entity(profile_user_id).await?;
        if viewer_id == Some(profile_user_id) {
            return Ok(self.ctx.visit_repo().count(profile_user_id).await?);
        }
        Ok(self.ctx.visit_repo().increment(profile_user_id).await?)
    }

    /// A user's profile visit count
    pub async fn visit_count(&self, user_id: &RecordId) -> ServiceResult<u64> {
        Ok(self.ctx.visit_repo().count(user_id).await?)
    }

    /// Non-admin users ranked by how many feed posts they have written.
    ///
    /// Group posts do not count, matching the home-page sidebar.
    #[instrument(skip(self))]
    pub async fn active_users(&self) -> ServiceResult<Vec<ActiveUserResponse>> {
        let posts = self.ctx.post_repo().list().await?;
        let users = self.ctx.user_repo().list().await?;

        let count_for = |user: &User| {
            posts
                .iter()
                .filter(|p| !p.in_group() && p.author_id == user.id)
                .count()
        };

        let mut ranked: Vec<ActiveUserResponse> = users
            .iter()
            .filter(|u| !u.is_admin())
            .map(|u| ActiveUserResponse {
                user: UserResponse::from(u),
                post_count: count_for(u),
            })
            .collect();
        ranked.sort_by(|a, b| b.post_count.cmp(&a.post_count));
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    // Covered end-to-end in tests/integration over the in-memory store.
}
