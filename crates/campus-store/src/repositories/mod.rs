//! Repository implementations
//!
//! JSON-store implementations of the repository traits defined in
//! campus-core. Each repository owns one storage key and re-reads the whole
//! value on every call.

mod checkin;
mod comment;
mod error;
mod favorite;
mod group;
mod post;
mod preference;
mod repost;
mod session;
mod user;
mod visit;

pub use checkin::JsonCheckinRepository;
pub use comment::JsonCommentRepository;
pub use favorite::JsonFavoriteRepository;
pub use group::JsonGroupRepository;
pub use post::JsonPostRepository;
pub use preference::JsonPreferenceRepository;
pub use repost::JsonRepostRepository;
pub use session::JsonSessionRepository;
pub use user::JsonUserRepository;
pub use visit::JsonVisitRepository;
