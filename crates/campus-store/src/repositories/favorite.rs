//! JSON store implementation of FavoriteRepository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use campus_core::traits::{FavoriteRepository, RepoResult};
use campus_core::value_objects::RecordId;

use crate::keys;
use crate::store::{read_json, write_json, KeyValueStore};

use super::error::map_store_error;

/// JSON store implementation of FavoriteRepository
///
/// Favorites are stored as a map from user id to an ordered post-id list.
#[derive(Clone)]
pub struct JsonFavoriteRepository {
    store: Arc<dyn KeyValueStore>,
}

impl JsonFavoriteRepository {
    /// Create a new JsonFavoriteRepository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> RepoResult<HashMap<String, Vec<String>>> {
        read_json(self.store.as_ref(), keys::FAVORITES).map_err(map_store_error)
    }

    fn save(&self, records: &HashMap<String, Vec<String>>) -> RepoResult<()> {
        write_json(self.store.as_ref(), keys::FAVORITES, records).map_err(map_store_error)
    }
}

#[async_trait]
impl FavoriteRepository for JsonFavoriteRepository {
    #[instrument(skip(self))]
    async fn list_for_user(&self, user_id: &RecordId) -> RepoResult<Vec<RecordId>> {
        let records = self.load()?;
        Ok(records
            .get(user_id.as_str())
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(RecordId::new)
            .collect())
    }

    #[instrument(skip(self))]
    async fn contains(&self, user_id: &RecordId, post_id: &RecordId) -> RepoResult<bool> {
        let records = self.load()?;
        Ok(records
            .get(user_id.as_str())
            .is_some_and(|ids| ids.iter().any(|id| id == post_id.as_str())))
    }

    #[instrument(skip(self))]
    async fn add(&self, user_id: &RecordId, post_id: &RecordId) -> RepoResult<()> {
        let mut records = self.load()?;
        let ids = records.entry(user_id.as_str().to_string()).or_default();
        if !ids.iter().any(|id| id == post_id.as_str()) {
            ids.push(post_id.as_str().to_string());
        }
        self.save(&records)
    }

    #[instrument(skip(self))]
    async fn remove(&self, user_id: &RecordId, post_id: &RecordId) -> RepoResult<()> {
        let mut records = self.load()?;
        if let Some(ids) = records.get_mut(user_id.as_str()) {
            ids.retain(|id| id != post_id.as_str());
        }
        self.save(&records)
    }
}
