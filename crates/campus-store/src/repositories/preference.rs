//! JSON store implementation of PreferenceRepository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use campus_core::traits::{PreferenceRepository, RepoResult, Theme};

use crate::keys;
use crate::store::KeyValueStore;

use super::error::map_store_error;

/// JSON store implementation of PreferenceRepository
///
/// The theme is stored as a bare string ("light"/"dark"); an unrecognized
/// stored value reads back as no preference.
#[derive(Clone)]
pub struct JsonPreferenceRepository {
    store: Arc<dyn KeyValueStore>,
}

impl JsonPreferenceRepository {
    /// Create a new JsonPreferenceRepository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PreferenceRepository for JsonPreferenceRepository {
    #[instrument(skip(self))]
    async fn theme(&self) -> RepoResult<Option<Theme>> {
        let raw = self.store.get(keys::THEME).map_err(map_store_error)?;
        Ok(raw.as_deref().and_then(Theme::parse))
    }

    #[instrument(skip(self))]
    async fn set_theme(&self, theme: Option<Theme>) -> RepoResult<()> {
        match theme {
            Some(theme) => self
                .store
                .set(keys::THEME, theme.as_str())
                .map_err(map_store_error),
            None => self.store.remove(keys::THEME).map_err(map_store_error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_theme_roundtrip() {
        let store = Arc::new(MemoryStore::new());
        let repo = JsonPreferenceRepository::new(store.clone());

        assert_eq!(repo.theme().await.unwrap(), None);

        repo.set_theme(Some(Theme::Dark)).await.unwrap();
        assert_eq!(repo.theme().await.unwrap(), Some(Theme::Dark));

        repo.set_theme(None).await.unwrap();
        assert_eq!(repo.theme().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unknown_stored_theme_reads_as_none() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::THEME, "sepia").unwrap();

        let repo = JsonPreferenceRepository::new(store);
        assert_eq!(repo.theme().await.unwrap(), None);
    }
}
