//! # campus-store
//!
//! Storage layer implementing the repository traits over a flat JSON
//! key-value store: one key per collection, re-read and re-written whole on
//! every operation.
//!
//! ## Overview
//!
//! - [`store`]: the `KeyValueStore` trait with file-backed and in-memory
//!   backends, plus JSON read/write helpers with default fallback
//! - [`models`]: serde structs matching the persisted JSON shapes
//! - [`mappers`]: record ↔ entity conversions
//! - [`repositories`]: one repository per storage key
//! - [`seed`]: demo data for an empty store
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use campus_core::traits::UserRepository;
//! use campus_store::repositories::JsonUserRepository;
//! use campus_store::store::MemoryStore;
//!
//! # async fn example() -> Result<(), campus_core::DomainError> {
//! let store = Arc::new(MemoryStore::new());
//! let user_repo = JsonUserRepository::new(store);
//! assert!(user_repo.find_by_student_id("20230001").await?.is_none());
//! # Ok(())
//! # }
//! ```

pub mod keys;
pub mod mappers;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

// Re-export commonly used types
pub use repositories::{
    JsonCheckinRepository, JsonCommentRepository, JsonFavoriteRepository, JsonGroupRepository,
    JsonPostRepository, JsonPreferenceRepository, JsonRepostRepository, JsonSessionRepository,
    JsonUserRepository, JsonVisitRepository,
};
pub use seed::{seed_demo_data_if_empty, SeedError, DEMO_PASSWORD};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
