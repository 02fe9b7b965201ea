//! # Store Errors
//!
//! The store knows nothing about transports. It reports absence as
//! `NotFound` and everything else as `Internal`.

use thiserror::Error;

use super::product::ProductId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with this id
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// The backend could not complete the operation
    #[error("store failure: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
