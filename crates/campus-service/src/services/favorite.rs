//! Favorite service

use campus_core::value_objects::RecordId;
use tracing::{info, instrument};

use crate::dto::PostResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Favorite service
pub struct FavoriteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FavoriteService<'a> {
    /// Create a new FavoriteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle a post in a user's favorites.
    ///
    /// Returns `true` when the post is now favorited. Toggling twice lands
    /// back on the original state.
    #[instrument(skip(self))]
    pub async fn toggle(&self, user_id: &RecordId, post_id: &RecordId) -> ServiceResult<bool> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let favorited = if self.ctx.favorite_repo().contains(user_id, post_id).await? {
            self.ctx.favorite_repo().remove(user_id, post_id).await?;
            false
        } else {
            self.ctx.favorite_repo().add(user_id, post_id).await?;
            true
        };

        info!(user_id = %user_id, post_id = %post_id, favorited, "Favorite toggled");
        Ok(favorited)
    }

    /// Check whether a user has favorited a post
    pub async fn is_favorite(
        &self,
        user_id: &RecordId,
        post_id: &RecordId,
    ) -> ServiceResult<bool> {
        Ok(self.ctx.favorite_repo().contains(user_id, post_id).await?)
    }

    /// The posts a user has favorited, in feed order.
    ///
    /// Favorites whose post has since been deleted are silently skipped.
    #[instrument(skip(self))]
    pub async fn favorite_posts(&self, user_id: &RecordId) -> ServiceResult<Vec<PostResponse>> {
        let ids = self.ctx.favorite_repo().list_for_user(user_id).await?;
        let posts = self.ctx.post_repo().list().await?;
        Ok(posts
            .iter()
            .filter(|p| ids.contains(&p.id))
            .map(PostResponse::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    // Covered end-to-end in tests/integration over the in-memory store.
}
