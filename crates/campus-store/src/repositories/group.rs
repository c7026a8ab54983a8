//! JSON store implementation of GroupRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use campus_core::entities::Group;
use campus_core::error::DomainError;
use campus_core::traits::{GroupRepository, RepoResult};
use campus_core::value_objects::RecordId;

use crate::keys;
use crate::models::GroupRecord;
use crate::store::{read_json, write_json, KeyValueStore};

use super::error::map_store_error;

/// JSON store implementation of GroupRepository
#[derive(Clone)]
pub struct JsonGroupRepository {
    store: Arc<dyn KeyValueStore>,
}

impl JsonGroupRepository {
    /// Create a new JsonGroupRepository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> RepoResult<Vec<GroupRecord>> {
        read_json(self.store.as_ref(), keys::GROUPS).map_err(map_store_error)
    }

    fn save(&self, records: &[GroupRecord]) -> RepoResult<()> {
        write_json(self.store.as_ref(), keys::GROUPS, &records).map_err(map_store_error)
    }
}

#[async_trait]
impl GroupRepository for JsonGroupRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Group>> {
        let records = self.load()?;
        Ok(records
            .into_iter()
            .find(|r| r.id == id.as_str())
            .map(Group::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Group>> {
        let records = self.load()?;
        Ok(records.into_iter().map(Group::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, user_id: &RecordId) -> RepoResult<Vec<Group>> {
        let records = self.load()?;
        Ok(records
            .into_iter()
            .filter(|r| r.members.iter().any(|m| m == user_id.as_str()))
            .map(Group::from)
            .collect())
    }

    #[instrument(skip(self, group))]
    async fn create(&self, group: &Group) -> RepoResult<()> {
        let mut records = self.load()?;
        records.push(GroupRecord::from_entity(group));
        self.save(&records)
    }

    #[instrument(skip(self, group))]
    async fn update(&self, group: &Group) -> RepoResult<()> {
        let mut records = self.load()?;
        let record = records
            .iter_mut()
            .find(|r| r.id == group.id.as_str())
            .ok_or_else(|| DomainError::GroupNotFound(group.id.clone()))?;
        *record = GroupRecord::from_entity(group);
        self.save(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn repo() -> JsonGroupRepository {
        JsonGroupRepository::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_membership_queries() {
        let repo = repo();
        let mut group = Group::new(
            RecordId::new("g_1"),
            "Study Circle".to_string(),
            RecordId::new("u_1"),
        );
        group.add_member(RecordId::new("u_2"));
        repo.create(&group).await.unwrap();

        let for_u2 = repo.find_by_member(&RecordId::new("u_2")).await.unwrap();
        assert_eq!(for_u2.len(), 1);

        let for_u3 = repo.find_by_member(&RecordId::new("u_3")).await.unwrap();
        assert!(for_u3.is_empty());
    }

    #[tokio::test]
    async fn test_update_membership() {
        let repo = repo();
        let mut group = Group::new(
            RecordId::new("g_1"),
            "Study Circle".to_string(),
            RecordId::new("u_1"),
        );
        repo.create(&group).await.unwrap();

        group.add_member(RecordId::new("u_2"));
        repo.update(&group).await.unwrap();

        let found = repo.find_by_id(&group.id).await.unwrap().unwrap();
        assert_eq!(found.member_count(), 2);
    }
}
