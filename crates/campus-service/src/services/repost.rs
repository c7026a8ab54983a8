//! Repost service

use campus_core::entities::{Post, Repost, Visibility};
use campus_core::value_objects::{RecordId, RecordKind};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{PostResponse, RepostRequest, RepostResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::user::UserService;

/// Feed text used when a repost carries no commentary.
const DEFAULT_REPOST_TEXT: &str = "Reposted";

/// Repost service
pub struct RepostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RepostService<'a> {
    /// Create a new RepostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Repost an existing post.
    ///
    /// Records the durable repost link and publishes a derived public post
    /// whose `repost_of` references the original.
    #[instrument(skip(self, request))]
    pub async fn repost(
        &self,
        user_id: &RecordId,
        original_post_id: &RecordId,
        request: RepostRequest,
    ) -> ServiceResult<RepostResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        UserService::new(self.ctx).get_user_entity(user_id).await?;
        self.ctx
            .post_repo()
            .find_by_id(original_post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", original_post_id.to_string()))?;

        let commentary = request
            .commentary
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let repost = Repost::new(
            self.ctx.generate_id(RecordKind::Repost),
            user_id.clone(),
            original_post_id.clone(),
            commentary.clone(),
        );
        self.ctx.repost_repo().create(&repost).await?;

        let mut post = Post::new(
            self.ctx.generate_id(RecordKind::Post),
            user_id.clone(),
            commentary
                .clone()
                .unwrap_or_else(|| DEFAULT_REPOST_TEXT.to_string()),
        );
        // Repost commentary does not contribute feed tags
        post.tags.clear();
        post.visibility = Visibility::Public;
        post.repost_of = Some(original_post_id.clone());
        self.ctx.post_repo().create(&post).await?;

        UserService::new(self.ctx).touch_last_active(user_id).await?;

        info!(
            repost_id = %repost.id,
            original_post_id = %original_post_id,
            "Reposted"
        );
        Ok(RepostResponse {
            id: repost.id.to_string(),
            user_id: repost.user_id.to_string(),
            original_post_id: repost.original_post_id.to_string(),
            commentary: repost.commentary,
            created_at: repost.created_at,
            post: PostResponse::from(&post),
        })
    }

    /// How many times a post has been reposted
    pub async fn repost_count(&self, post_id: &RecordId) -> ServiceResult<u64> {
        Ok(self.ctx.repost_repo().count_for_post(post_id).await?)
    }
}
