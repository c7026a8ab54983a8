//! Post service
//!
//! Publishing, editing, deletion with comment cascade, likes, and the feed
//! queries.

use campus_core::entities::{Post, Visibility};
use campus_core::value_objects::{RecordId, RecordKind};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    CreatePostRequest, FeedQuery, FeedTab, PostResponse, TagCountResponse, UpdatePostRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::user::UserService;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a post by id
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: &RecordId) -> ServiceResult<PostResponse> {
        let post = self.get_post_entity(post_id).await?;
        Ok(PostResponse::from(&post))
    }

    async fn get_post_entity(&self, post_id: &RecordId) -> ServiceResult<Post> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))
    }

    /// Publish a post
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        author_id: &RecordId,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let content = request.content.trim().to_string();
        if content.is_empty() {
            return Err(ServiceError::validation("Content cannot be empty"));
        }

        // Author must exist before anything is written
        UserService::new(self.ctx).get_user_entity(author_id).await?;

        let group_id = match request.group_id {
            Some(raw) if !raw.is_empty() => {
                let group_id = RecordId::new(raw);
                let group = self
                    .ctx
                    .group_repo()
                    .find_by_id(&group_id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("Group", group_id.to_string()))?;
                if !group.is_member(author_id) {
                    return Err(campus_core::DomainError::NotGroupMember.into());
                }
                Some(group_id)
            }
            _ => None,
        };

        let mut post = Post::new(
            self.ctx.generate_id(RecordKind::Post),
            author_id.clone(),
            content,
        );
        post.images = request.images;
        post.visibility = request
            .visibility
            .as_deref()
            .map(Visibility::from_str_lossy)
            .unwrap_or_default();
        post.group_id = group_id;

        self.ctx.post_repo().create(&post).await?;
        UserService::new(self.ctx).touch_last_active(author_id).await?;

        info!(post_id = %post.id, author_id = %author_id, "Post published");
        Ok(PostResponse::from(&post))
    }

    /// Edit a post via an explicit update; only the author may edit
    #[instrument(skip(self, request))]
    pub async fn edit_post(
        &self,
        actor_id: &RecordId,
        post_id: &RecordId,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let mut post = self.get_post_entity(post_id).await?;
        if !post.is_author(actor_id) {
            return Err(campus_core::DomainError::NotPostAuthor.into());
        }

        if let Some(content) = request.content {
            let content = content.trim().to_string();
            if content.is_empty() {
                return Err(ServiceError::validation("Content cannot be empty"));
            }
            // Tags re-derive from the new content
            post.set_content(content);
        }
        if let Some(images) = request.images {
            post.images = images;
        }
        if let Some(visibility) = request.visibility {
            post.visibility = Visibility::from_str_lossy(&visibility);
        }

        self.ctx.post_repo().update(&post).await?;
        info!(post_id = %post_id, "Post edited");
        Ok(PostResponse::from(&post))
    }

    /// Delete a post and cascade to its comments.
    ///
    /// Allowed for the author and for admins.
    #[instrument(skip(self))]
    pub async fn delete_post(&self, actor_id: &RecordId, post_id: &RecordId) -> ServiceResult<()> {
        let post = self.get_post_entity(post_id).await?;
        let actor = UserService::new(self.ctx).get_user_entity(actor_id).await?;
        if !post.is_author(actor_id) && !actor.is_admin() {
            return Err(campus_core::DomainError::NotPostAuthor.into());
        }

        self.ctx.post_repo().delete(post_id).await?;
        let removed_comments = self.ctx.comment_repo().delete_by_post(post_id).await?;

        info!(post_id = %post_id, removed_comments, "Post deleted");
        Ok(())
    }

    /// Like a post; the count only ever moves up from zero
    #[instrument(skip(self))]
    pub async fn like(&self, post_id: &RecordId) -> ServiceResult<PostResponse> {
        self.apply_like(post_id, 1).await
    }

    /// Take a like back; the count never goes negative
    #[instrument(skip(self))]
    pub async fn retract_like(&self, post_id: &RecordId) -> ServiceResult<PostResponse> {
        self.apply_like(post_id, -1).await
    }

    async fn apply_like(&self, post_id: &RecordId, delta: i64) -> ServiceResult<PostResponse> {
        let mut post = self.get_post_entity(post_id).await?;
        post.apply_like(delta);
        self.ctx.post_repo().update(&post).await?;
        Ok(PostResponse::from(&post))
    }

    /// The home feed: non-group posts, newest first.
    ///
    /// The Recommended tab shows public posts only. The Following tab shows
    /// posts authored by users the viewer follows (and nothing when logged
    /// out). An optional keyword matches content and tags.
    #[instrument(skip(self))]
    pub async fn feed(
        &self,
        viewer_id: Option<&RecordId>,
        query: &FeedQuery,
    ) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().list().await?;
        let mut posts: Vec<Post> = posts.into_iter().filter(|p| !p.in_group()).collect();

        match query.tab {
            FeedTab::Following => {
                let Some(viewer_id) = viewer_id else {
                    return Ok(Vec::new());
                };
                let viewer = UserService::new(self.ctx).get_user_entity(viewer_id).await?;
                posts.retain(|p| viewer.is_following(&p.author_id));
            }
            FeedTab::Recommended => {
                posts.retain(|p| p.visibility == Visibility::Public);
            }
        }

        if let Some(keyword) = query.keyword.as_deref().filter(|k| !k.is_empty()) {
            posts.retain(|p| {
                p.content.contains(keyword) || p.tags.iter().any(|t| t.contains(keyword))
            });
        }

        Ok(posts.iter().map(PostResponse::from).collect())
    }

    /// Posts published into a group, newest first
    #[instrument(skip(self))]
    pub async fn group_posts(&self, group_id: &RecordId) -> ServiceResult<Vec<PostResponse>> {
        self.ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Group", group_id.to_string()))?;

        let posts = self.ctx.post_repo().find_by_group(group_id).await?;
        Ok(posts.iter().map(PostResponse::from).collect())
    }

    /// A user's posts, newest first
    #[instrument(skip(self))]
    pub async fn posts_by_author(&self, author_id: &RecordId) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().find_by_author(author_id).await?;
        Ok(posts.iter().map(PostResponse::from).collect())
    }

    /// Tag frequencies across all non-group posts, most used first.
    ///
    /// Ties keep first-encountered order (stable sort over scan order).
    #[instrument(skip(self))]
    pub async fn hot_topics(&self) -> ServiceResult<Vec<TagCountResponse>> {
        let posts = self.ctx.post_repo().list().await?;

        let mut counts: Vec<TagCountResponse> = Vec::new();
        for post in posts.iter().filter(|p| !p.in_group()) {
            for tag in &post.tags {
                match counts.iter_mut().find(|tc| &tc.tag == tag) {
                    Some(tc) => tc.count += 1,
                    None => counts.push(TagCountResponse {
                        tag: tag.clone(),
                        count: 1,
                    }),
                }
            }
        }
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        Ok(counts)
    }
}
