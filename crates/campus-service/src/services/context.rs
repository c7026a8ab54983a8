//! Service context - dependency container for services
//!
//! Holds the repositories and the id generator every service needs.

use std::sync::Arc;

use campus_core::traits::{
    CheckinRepository, CommentRepository, FavoriteRepository, GroupRepository, PostRepository,
    PreferenceRepository, RepostRepository, SessionRepository, UserRepository, VisitRepository,
};
use campus_core::value_objects::{RecordId, RecordIdGenerator, RecordKind};
use campus_store::repositories::{
    JsonCheckinRepository, JsonCommentRepository, JsonFavoriteRepository, JsonGroupRepository,
    JsonPostRepository, JsonPreferenceRepository, JsonRepostRepository, JsonSessionRepository,
    JsonUserRepository, JsonVisitRepository,
};
use campus_store::store::KeyValueStore;

/// Service context containing all dependencies
///
/// This is the dependency container passed to every service. It provides
/// access to the repositories and the record id generator. Repositories are
/// trait objects, so tests swap in the in-memory store wholesale.
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    group_repo: Arc<dyn GroupRepository>,
    checkin_repo: Arc<dyn CheckinRepository>,
    favorite_repo: Arc<dyn FavoriteRepository>,
    repost_repo: Arc<dyn RepostRepository>,
    session_repo: Arc<dyn SessionRepository>,
    preference_repo: Arc<dyn PreferenceRepository>,
    visit_repo: Arc<dyn VisitRepository>,
    id_generator: Arc<RecordIdGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        group_repo: Arc<dyn GroupRepository>,
        checkin_repo: Arc<dyn CheckinRepository>,
        favorite_repo: Arc<dyn FavoriteRepository>,
        repost_repo: Arc<dyn RepostRepository>,
        session_repo: Arc<dyn SessionRepository>,
        preference_repo: Arc<dyn PreferenceRepository>,
        visit_repo: Arc<dyn VisitRepository>,
        id_generator: Arc<RecordIdGenerator>,
    ) -> Self {
        Self {
            user_repo,
            post_repo,
            comment_repo,
            group_repo,
            checkin_repo,
            favorite_repo,
            repost_repo,
            session_repo,
            preference_repo,
            visit_repo,
            id_generator,
        }
    }

    /// Wire every repository to one key-value store.
    ///
    /// This is the standard setup: the file store in the app, the memory
    /// store in tests.
    pub fn from_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self::new(
            Arc::new(JsonUserRepository::new(store.clone())),
            Arc::new(JsonPostRepository::new(store.clone())),
            Arc::new(JsonCommentRepository::new(store.clone())),
            Arc::new(JsonGroupRepository::new(store.clone())),
            Arc::new(JsonCheckinRepository::new(store.clone())),
            Arc::new(JsonFavoriteRepository::new(store.clone())),
            Arc::new(JsonRepostRepository::new(store.clone())),
            Arc::new(JsonSessionRepository::new(store.clone())),
            Arc::new(JsonPreferenceRepository::new(store.clone())),
            Arc::new(JsonVisitRepository::new(store)),
            Arc::new(RecordIdGenerator::new()),
        )
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the group repository
    pub fn group_repo(&self) -> &dyn GroupRepository {
        self.group_repo.as_ref()
    }

    /// Get the check-in repository
    pub fn checkin_repo(&self) -> &dyn CheckinRepository {
        self.checkin_repo.as_ref()
    }

    /// Get the favorite repository
    pub fn favorite_repo(&self) -> &dyn FavoriteRepository {
        self.favorite_repo.as_ref()
    }

    /// Get the repost repository
    pub fn repost_repo(&self) -> &dyn RepostRepository {
        self.repost_repo.as_ref()
    }

    /// Get the session repository
    pub fn session_repo(&self) -> &dyn SessionRepository {
        self.session_repo.as_ref()
    }

    /// Get the preference repository
    pub fn preference_repo(&self) -> &dyn PreferenceRepository {
        self.preference_repo.as_ref()
    }

    /// Get the visit repository
    pub fn visit_repo(&self) -> &dyn VisitRepository {
        self.visit_repo.as_ref()
    }

    // === Services ===

    /// Generate a new record id of the given kind
    pub fn generate_id(&self, kind: RecordKind) -> RecordId {
        self.id_generator.generate(kind)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}
