//! Error handling utilities for repositories

use campus_core::error::DomainError;

use crate::store::StoreError;

/// Convert a store error to DomainError
pub fn map_store_error(e: StoreError) -> DomainError {
    DomainError::StorageError(e.to_string())
}
