//! JSON store implementation of RepostRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use campus_core::entities::Repost;
use campus_core::traits::{RepoResult, RepostRepository};
use campus_core::value_objects::RecordId;

use crate::keys;
use crate::models::RepostRecord;
use crate::store::{read_json, write_json, KeyValueStore};

use super::error::map_store_error;

/// JSON store implementation of RepostRepository
#[derive(Clone)]
pub struct JsonRepostRepository {
    store: Arc<dyn KeyValueStore>,
}

impl JsonRepostRepository {
    /// Create a new JsonRepostRepository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> RepoResult<Vec<RepostRecord>> {
        read_json(self.store.as_ref(), keys::REPOSTS).map_err(map_store_error)
    }

    fn save(&self, records: &[RepostRecord]) -> RepoResult<()> {
        write_json(self.store.as_ref(), keys::REPOSTS, &records).map_err(map_store_error)
    }
}

#[async_trait]
impl RepostRepository for JsonRepostRepository {
    #[instrument(skip(self, repost))]
    async fn create(&self, repost: &Repost) -> RepoResult<()> {
        let mut records = self.load()?;
        records.push(RepostRecord::from_entity(repost));
        self.save(&records)
    }

    #[instrument(skip(self))]
    async fn count_for_post(&self, post_id: &RecordId) -> RepoResult<u64> {
        let records = self.load()?;
        Ok(records
            .iter()
            .filter(|r| r.original_post_id == post_id.as_str())
            .count() as u64)
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: &RecordId) -> RepoResult<Vec<Repost>> {
        let records = self.load()?;
        Ok(records
            .into_iter()
            .filter(|r| r.user_id == user_id.as_str())
            .map(Repost::from)
            .collect())
    }
}
