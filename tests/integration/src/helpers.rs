//! Test helpers for integration tests
//!
//! Builds service contexts over the in-memory store and writes backdated
//! records directly through the repositories.

use std::sync::Arc;

use chrono::{Duration, Utc};

use campus_core::entities::{Checkin, Comment, Post};
use campus_core::value_objects::RecordId;
use campus_service::dto::CurrentUserResponse;
use campus_service::services::{AuthService, ServiceContext};
use campus_store::store::MemoryStore;

use crate::fixtures::{complete_registration_request, unique_register_request};

/// A service context wired to a fresh in-memory store
pub fn test_context() -> ServiceContext {
    ServiceContext::from_store(Arc::new(MemoryStore::new()))
}

/// A service context over a store pre-filled with the demo seed data
pub fn seeded_context() -> ServiceContext {
    let store = Arc::new(MemoryStore::new());
    campus_store::seed_demo_data_if_empty(store.as_ref()).expect("seeding demo data");
    ServiceContext::from_store(store)
}

/// Run the full two-step registration flow, returning the logged-in user
pub async fn register_user(ctx: &ServiceContext) -> CurrentUserResponse {
    let auth = AuthService::new(ctx);
    auth.register_basic(unique_register_request())
        .await
        .expect("registration step one");
    auth.complete_registration(complete_registration_request())
        .await
        .expect("registration step two")
}

/// Write a check-in dated `days_ago` calendar days in the past
pub async fn backdate_checkin(ctx: &ServiceContext, user_id: &RecordId, days_ago: i64) {
    let suffix = crate::fixtures::unique_suffix();
    let mut checkin = Checkin::new(
        RecordId::new(format!("ch_test{suffix}")),
        user_id.clone(),
        None,
    );
    checkin.created_at = Utc::now() - Duration::days(days_ago);
    ctx.checkin_repo()
        .create(&checkin)
        .await
        .expect("backdated check-in");
}

/// Write a post with an explicit timestamp
pub async fn backdate_post(
    ctx: &ServiceContext,
    author_id: &RecordId,
    content: &str,
    at: chrono::DateTime<Utc>,
) -> RecordId {
    let suffix = crate::fixtures::unique_suffix();
    let mut post = Post::new(
        RecordId::new(format!("p_test{suffix}")),
        author_id.clone(),
        content.to_string(),
    );
    post.created_at = at;
    ctx.post_repo().create(&post).await.expect("backdated post");
    post.id
}

/// Write a comment with an explicit timestamp
pub async fn backdate_comment(
    ctx: &ServiceContext,
    author_id: &RecordId,
    post_id: &RecordId,
    at: chrono::DateTime<Utc>,
) {
    let suffix = crate::fixtures::unique_suffix();
    let mut comment = Comment::new(
        RecordId::new(format!("c_test{suffix}")),
        post_id.clone(),
        author_id.clone(),
        "backdated".to_string(),
    );
    comment.created_at = at;
    ctx.comment_repo()
        .create(&comment)
        .await
        .expect("backdated comment");
}
