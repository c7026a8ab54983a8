//! Comment service

use campus_core::entities::Comment;
use campus_core::value_objects::{RecordId, RecordKind};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::user::UserService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a comment to an existing post
    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        author_id: &RecordId,
        post_id: &RecordId,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let comment = Comment::new(
            self.ctx.generate_id(RecordKind::Comment),
            post_id.clone(),
            author_id.clone(),
            request.content,
        );
        self.ctx.comment_repo().create(&comment).await?;
        UserService::new(self.ctx).touch_last_active(author_id).await?;

        info!(comment_id = %comment.id, post_id = %post_id, "Comment added");
        Ok(CommentResponse::from(&comment))
    }

    /// Comments on a post, newest first
    #[instrument(skip(self))]
    pub async fn comments_for_post(
        &self,
        post_id: &RecordId,
    ) -> ServiceResult<Vec<CommentResponse>> {
        let comments = self.ctx.comment_repo().find_by_post(post_id).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Delete a comment; allowed for its author and for admins
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        actor_id: &RecordId,
        comment_id: &RecordId,
    ) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        let actor = UserService::new(self.ctx).get_user_entity(actor_id).await?;
        if !comment.is_author(actor_id) && !actor.is_admin() {
            return Err(campus_core::DomainError::NotCommentAuthor.into());
        }

        self.ctx.comment_repo().delete(comment_id).await?;
        info!(comment_id = %comment_id, "Comment deleted");
        Ok(())
    }
}
