//! Key-value storage backend
//!
//! The persistence model is a flat set of string keys, each holding either a
//! JSON document or a bare scalar (the session keys). Repositories re-read
//! and re-serialize the whole value for their key on every call; there is no
//! indexing or caching.

mod file;
mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage backend errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A synchronous string key-value store.
///
/// Backends only deal in raw strings; the JSON layer sits on top in
/// [`read_json`]/[`write_json`].
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value for a key, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write the raw value for a key
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key (no-op when absent)
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Read and deserialize a key's JSON document.
///
/// A missing key or malformed JSON falls back to the type's default; parse
/// failures are logged but never surfaced.
pub fn read_json<T>(store: &dyn KeyValueStore, key: &str) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.get(key)? else {
        return Ok(T::default());
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(key, error = %e, "Malformed JSON in store, falling back to default");
            Ok(T::default())
        }
    }
}

/// Serialize and write a value under a key.
pub fn write_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
