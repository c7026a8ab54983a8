//! Admin service
//!
//! Moderation operations: every method first checks the acting user holds
//! the admin role.

use campus_common::AppError;
use campus_core::entities::User;
use campus_core::value_objects::RecordId;
use rand::seq::SliceRandom;
use tracing::{info, instrument, warn};

use crate::dto::{CurrentUserResponse, PostResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::post::PostService;
use super::user::UserService;

/// Stock avatars assigned by "reset avatar".
const STOCK_AVATARS: &[&str] = &[
    "img/avatars/adventurer-01.jpg",
    "img/avatars/adventurer-02.jpg",
    "img/avatars/adventurer-03.jpg",
    "img/avatars/adventurer-04.jpg",
    "img/avatars/adventurer-05.jpg",
    "img/avatars/adventurer-06.jpg",
    "img/avatars/adventurer-07.jpg",
    "img/avatars/adventurer-08.jpg",
];

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn require_admin(&self, actor_id: &RecordId) -> ServiceResult<User> {
        let actor = UserService::new(self.ctx).get_user_entity(actor_id).await?;
        if !actor.is_admin() {
            warn!(actor_id = %actor_id, "Admin operation rejected");
            return Err(ServiceError::App(AppError::AdminRequired));
        }
        Ok(actor)
    }

    /// Every account, for the user management table
    #[instrument(skip(self))]
    pub async fn list_users(&self, actor_id: &RecordId) -> ServiceResult<Vec<CurrentUserResponse>> {
        self.require_admin(actor_id).await?;
        let users = self.ctx.user_repo().list().await?;
        Ok(users.iter().map(CurrentUserResponse::from).collect())
    }

    /// Ban or unban an account
    #[instrument(skip(self))]
    pub async fn set_banned(
        &self,
        actor_id: &RecordId,
        user_id: &RecordId,
        banned: bool,
    ) -> ServiceResult<CurrentUserResponse> {
        self.require_admin(actor_id).await?;

        let mut user = UserService::new(self.ctx).get_user_entity(user_id).await?;
        if user.banned != banned {
            user.banned = banned;
            self.ctx.user_repo().update(&user).await?;
            info!(user_id = %user_id, banned, "Ban flag updated");
        }
        Ok(CurrentUserResponse::from(&user))
    }

    /// Replace a user's avatar with a random stock avatar
    #[instrument(skip(self))]
    pub async fn reset_avatar(
        &self,
        actor_id: &RecordId,
        user_id: &RecordId,
    ) -> ServiceResult<CurrentUserResponse> {
        self.require_admin(actor_id).await?;

        let mut user = UserService::new(self.ctx).get_user_entity(user_id).await?;
        let avatar = STOCK_AVATARS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(STOCK_AVATARS[0]);
        user.avatar = avatar.to_string();
        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, "Avatar reset");
        Ok(CurrentUserResponse::from(&user))
    }

    /// All posts, newest first, for the audit list
    #[instrument(skip(self))]
    pub async fn audit_posts(&self, actor_id: &RecordId) -> ServiceResult<Vec<PostResponse>> {
        self.require_admin(actor_id).await?;
        let posts = self.ctx.post_repo().list().await?;
        Ok(posts.iter().map(PostResponse::from).collect())
    }

    /// Forcibly delete any post, with the usual comment cascade
    #[instrument(skip(self))]
    pub async fn force_delete_post(
        &self,
        actor_id: &RecordId,
        post_id: &RecordId,
    ) -> ServiceResult<()> {
        self.require_admin(actor_id).await?;
        // Admins pass the author-or-admin check inside delete_post
        PostService::new(self.ctx).delete_post(actor_id, post_id).await
    }
}
