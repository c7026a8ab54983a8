//! JSON store implementation of UserRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use campus_core::entities::User;
use campus_core::error::DomainError;
use campus_core::traits::{RepoResult, UserRepository};
use campus_core::value_objects::RecordId;

use crate::keys;
use crate::models::UserRecord;
use crate::store::{read_json, write_json, KeyValueStore};

use super::error::map_store_error;

/// JSON store implementation of UserRepository
#[derive(Clone)]
pub struct JsonUserRepository {
    store: Arc<dyn KeyValueStore>,
}

impl JsonUserRepository {
    /// Create a new JsonUserRepository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> RepoResult<Vec<UserRecord>> {
        read_json(self.store.as_ref(), keys::USERS).map_err(map_store_error)
    }

    fn save(&self, records: &[UserRecord]) -> RepoResult<()> {
        write_json(self.store.as_ref(), keys::USERS, &records).map_err(map_store_error)
    }
}

#[async_trait]
impl UserRepository for JsonUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<User>> {
        let records = self.load()?;
        Ok(records
            .into_iter()
            .find(|r| r.id == id.as_str())
            .map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_student_id(&self, student_id: &str) -> RepoResult<Option<User>> {
        let records = self.load()?;
        Ok(records
            .into_iter()
            .find(|r| r.student_id == student_id)
            .map(User::from))
    }

    #[instrument(skip(self))]
    async fn student_id_exists(&self, student_id: &str) -> RepoResult<bool> {
        let records = self.load()?;
        Ok(records.iter().any(|r| r.student_id == student_id))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<User>> {
        let records = self.load()?;
        Ok(records.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self, user, password_hash))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut records = self.load()?;
        records.push(UserRecord::from_entity(user, password_hash));
        self.save(&records)
    }

    #[instrument(skip(self, user))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut records = self.load()?;
        let record = records
            .iter_mut()
            .find(|r| r.id == user.id.as_str())
            .ok_or_else(|| DomainError::UserNotFound(user.id.clone()))?;
        record.apply_entity(user);
        self.save(&records)
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: &RecordId) -> RepoResult<Option<String>> {
        let records = self.load()?;
        Ok(records
            .into_iter()
            .find(|r| r.id == id.as_str())
            .map(|r| r.password))
    }
}
