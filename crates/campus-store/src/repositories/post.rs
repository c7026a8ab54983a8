//! JSON store implementation of PostRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use campus_core::entities::Post;
use campus_core::error::DomainError;
use campus_core::traits::{PostRepository, RepoResult};
use campus_core::value_objects::RecordId;

use crate::keys;
use crate::models::PostRecord;
use crate::store::{read_json, write_json, KeyValueStore};

use super::error::map_store_error;

/// JSON store implementation of PostRepository
///
/// The stored list is kept newest-first: creates insert at the head, the
/// way the feed consumes it.
#[derive(Clone)]
pub struct JsonPostRepository {
    store: Arc<dyn KeyValueStore>,
}

impl JsonPostRepository {
    /// Create a new JsonPostRepository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> RepoResult<Vec<PostRecord>> {
        read_json(self.store.as_ref(), keys::POSTS).map_err(map_store_error)
    }

    fn save(&self, records: &[PostRecord]) -> RepoResult<()> {
        write_json(self.store.as_ref(), keys::POSTS, &records).map_err(map_store_error)
    }
}

#[async_trait]
impl PostRepository for JsonPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Post>> {
        let records = self.load()?;
        Ok(records
            .into_iter()
            .find(|r| r.id == id.as_str())
            .map(Post::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Post>> {
        let mut posts: Vec<Post> = self.load()?.into_iter().map(Post::from).collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, author_id: &RecordId) -> RepoResult<Vec<Post>> {
        let posts = self.list().await?;
        Ok(posts
            .into_iter()
            .filter(|p| &p.author_id == author_id)
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_by_group(&self, group_id: &RecordId) -> RepoResult<Vec<Post>> {
        let posts = self.list().await?;
        Ok(posts
            .into_iter()
            .filter(|p| p.group_id.as_ref() == Some(group_id))
            .collect())
    }

    #[instrument(skip(self, post))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        let mut records = self.load()?;
        records.insert(0, PostRecord::from_entity(post));
        self.save(&records)
    }

    #[instrument(skip(self, post))]
    async fn update(&self, post: &Post) -> RepoResult<()> {
        let mut records = self.load()?;
        let record = records
            .iter_mut()
            .find(|r| r.id == post.id.as_str())
            .ok_or_else(|| DomainError::PostNotFound(post.id.clone()))?;
        *record = PostRecord::from_entity(post);
        self.save(&records)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &RecordId) -> RepoResult<()> {
        let mut records = self.load()?;
        records.retain(|r| r.id != id.as_str());
        self.save(&records)
    }
}
