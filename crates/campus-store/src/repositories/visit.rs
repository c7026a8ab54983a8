//! JSON store implementation of VisitRepository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use campus_core::traits::{RepoResult, VisitRepository};
use campus_core::value_objects::RecordId;

use crate::keys;
use crate::store::{read_json, write_json, KeyValueStore};

use super::error::map_store_error;

/// JSON store implementation of VisitRepository
///
/// Visit counters are a map from user id to count.
#[derive(Clone)]
pub struct JsonVisitRepository {
    store: Arc<dyn KeyValueStore>,
}

impl JsonVisitRepository {
    /// Create a new JsonVisitRepository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> RepoResult<HashMap<String, u64>> {
        read_json(self.store.as_ref(), keys::USER_VISITS).map_err(map_store_error)
    }

    fn save(&self, records: &HashMap<String, u64>) -> RepoResult<()> {
        write_json(self.store.as_ref(), keys::USER_VISITS, records).map_err(map_store_error)
    }
}

#[async_trait]
impl VisitRepository for JsonVisitRepository {
    #[instrument(skip(self))]
    async fn increment(&self, user_id: &RecordId) -> RepoResult<u64> {
        let mut records = self.load()?;
        let count = records.entry(user_id.as_str().to_string()).or_insert(0);
        *count += 1;
        let updated = *count;
        self.save(&records)?;
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn count(&self, user_id: &RecordId) -> RepoResult<u64> {
        let records = self.load()?;
        Ok(records.get(user_id.as_str()).copied().unwrap_or(0))
    }
}
