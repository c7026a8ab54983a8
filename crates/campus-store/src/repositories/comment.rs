//! JSON store implementation of CommentRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use campus_core::entities::Comment;
use campus_core::traits::{CommentRepository, RepoResult};
use campus_core::value_objects::RecordId;

use crate::keys;
use crate::models::CommentRecord;
use crate::store::{read_json, write_json, KeyValueStore};

use super::error::map_store_error;

/// JSON store implementation of CommentRepository
#[derive(Clone)]
pub struct JsonCommentRepository {
    store: Arc<dyn KeyValueStore>,
}

impl JsonCommentRepository {
    /// Create a new JsonCommentRepository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> RepoResult<Vec<CommentRecord>> {
        read_json(self.store.as_ref(), keys::COMMENTS).map_err(map_store_error)
    }

    fn save(&self, records: &[CommentRecord]) -> RepoResult<()> {
        write_json(self.store.as_ref(), keys::COMMENTS, &records).map_err(map_store_error)
    }
}

#[async_trait]
impl CommentRepository for JsonCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Comment>> {
        let records = self.load()?;
        Ok(records
            .into_iter()
            .find(|r| r.id == id.as_str())
            .map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: &RecordId) -> RepoResult<Vec<Comment>> {
        let records = self.load()?;
        let mut comments: Vec<Comment> = records
            .into_iter()
            .filter(|r| r.post_id == post_id.as_str())
            .map(Comment::from)
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    #[instrument(skip(self))]
    async fn find_by_author(&self, author_id: &RecordId) -> RepoResult<Vec<Comment>> {
        let records = self.load()?;
        Ok(records
            .into_iter()
            .filter(|r| r.user_id == author_id.as_str())
            .map(Comment::from)
            .collect())
    }

    #[instrument(skip(self, comment))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        let mut records = self.load()?;
        records.push(CommentRecord::from_entity(comment));
        self.save(&records)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &RecordId) -> RepoResult<()> {
        let mut records = self.load()?;
        records.retain(|r| r.id != id.as_str());
        self.save(&records)
    }

    #[instrument(skip(self))]
    async fn delete_by_post(&self, post_id: &RecordId) -> RepoResult<u64> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.post_id != post_id.as_str());
        let removed = (before - records.len()) as u64;
        self.save(&records)?;
        Ok(removed)
    }
}
