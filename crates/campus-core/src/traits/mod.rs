//! Repository ports

mod repositories;

pub use repositories::{
    CheckinRepository, CommentRepository, FavoriteRepository, GroupRepository,
    PendingRegistration, PostRepository, PreferenceRepository, RepoResult, RepostRepository,
    SessionRepository, Theme, UserRepository, VisitRepository,
};
