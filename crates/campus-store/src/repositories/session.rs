//! JSON store implementation of SessionRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use campus_core::traits::{PendingRegistration, RepoResult, SessionRepository};
use campus_core::value_objects::RecordId;

use crate::keys;
use crate::models::PendingRegistrationRecord;
use crate::store::{KeyValueStore, StoreError};

use super::error::map_store_error;

/// JSON store implementation of SessionRepository
///
/// The session id and remembered student id are stored as bare strings,
/// not JSON documents; only the pending registration is a JSON value.
#[derive(Clone)]
pub struct JsonSessionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl JsonSessionRepository {
    /// Create a new JsonSessionRepository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn get_raw(&self, key: &str) -> RepoResult<Option<String>> {
        self.store.get(key).map_err(map_store_error)
    }

    fn set_raw(&self, key: &str, value: Option<&str>) -> RepoResult<()> {
        let result: Result<(), StoreError> = match value {
            Some(value) if !value.is_empty() => self.store.set(key, value),
            _ => self.store.remove(key),
        };
        result.map_err(map_store_error)
    }
}

#[async_trait]
impl SessionRepository for JsonSessionRepository {
    #[instrument(skip(self))]
    async fn current_user_id(&self) -> RepoResult<Option<RecordId>> {
        Ok(self.get_raw(keys::CURRENT_USER_ID)?.map(RecordId::new))
    }

    #[instrument(skip(self))]
    async fn set_current_user_id(&self, user_id: Option<&RecordId>) -> RepoResult<()> {
        self.set_raw(keys::CURRENT_USER_ID, user_id.map(RecordId::as_str))
    }

    #[instrument(skip(self))]
    async fn remembered_student_id(&self) -> RepoResult<Option<String>> {
        self.get_raw(keys::REMEMBERED_STUDENT_ID)
    }

    #[instrument(skip(self))]
    async fn set_remembered_student_id(&self, student_id: Option<&str>) -> RepoResult<()> {
        self.set_raw(keys::REMEMBERED_STUDENT_ID, student_id)
    }

    #[instrument(skip(self))]
    async fn pending_registration(&self) -> RepoResult<Option<PendingRegistration>> {
        let Some(raw) = self.get_raw(keys::PENDING_REGISTRATION)? else {
            return Ok(None);
        };
        // Malformed JSON counts as "no pending registration"
        let record: Option<PendingRegistrationRecord> = serde_json::from_str(&raw).ok();
        Ok(record.map(|r| PendingRegistration {
            student_id: r.student_id,
            nickname: r.nickname,
            password_hash: r.password,
        }))
    }

    #[instrument(skip(self, pending))]
    async fn set_pending_registration(
        &self,
        pending: Option<&PendingRegistration>,
    ) -> RepoResult<()> {
        match pending {
            Some(pending) => {
                let record = PendingRegistrationRecord {
                    student_id: pending.student_id.clone(),
                    nickname: pending.nickname.clone(),
                    password: pending.password_hash.clone(),
                };
                let raw = serde_json::to_string(&record)
                    .map_err(|e| map_store_error(StoreError::Serialize(e)))?;
                self.store
                    .set(keys::PENDING_REGISTRATION, &raw)
                    .map_err(map_store_error)
            }
            None => self
                .store
                .remove(keys::PENDING_REGISTRATION)
                .map_err(map_store_error),
        }
    }
}
