//! JSON store implementation of CheckinRepository

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use campus_core::entities::Checkin;
use campus_core::traits::{CheckinRepository, RepoResult};
use campus_core::value_objects::RecordId;

use crate::keys;
use crate::models::CheckinRecord;
use crate::store::{read_json, write_json, KeyValueStore};

use super::error::map_store_error;

/// JSON store implementation of CheckinRepository
///
/// Check-ins are stored as a map from user id to a newest-first record
/// list.
#[derive(Clone)]
pub struct JsonCheckinRepository {
    store: Arc<dyn KeyValueStore>,
}

impl JsonCheckinRepository {
    /// Create a new JsonCheckinRepository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> RepoResult<HashMap<String, Vec<CheckinRecord>>> {
        read_json(self.store.as_ref(), keys::CHECKINS).map_err(map_store_error)
    }

    fn save(&self, records: &HashMap<String, Vec<CheckinRecord>>) -> RepoResult<()> {
        write_json(self.store.as_ref(), keys::CHECKINS, records).map_err(map_store_error)
    }
}

#[async_trait]
impl CheckinRepository for JsonCheckinRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: &RecordId) -> RepoResult<Vec<Checkin>> {
        let records = self.load()?;
        let mut checkins: Vec<Checkin> = records
            .get(user_id.as_str())
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(Checkin::from)
            .collect();
        checkins.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(checkins)
    }

    #[instrument(skip(self, checkin))]
    async fn create(&self, checkin: &Checkin) -> RepoResult<()> {
        let mut records = self.load()?;
        let list = records
            .entry(checkin.user_id.as_str().to_string())
            .or_default();
        list.insert(0, CheckinRecord::from_entity(checkin));
        self.save(&records)
    }
}
