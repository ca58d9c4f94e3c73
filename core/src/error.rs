//! Error handling for the inventory state manager

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::storage::StorageError;

/// Store error types
#[derive(Error, Debug)]
pub enum StoreError {
    /// An operation referenced an item id absent from the collection
    #[error("Fabric item {0} not found")]
    ItemNotFound(Uuid),

    /// A non-positive quantity was supplied to a movement operation
    #[error("Movement quantity must be positive, got {0}")]
    InvalidQuantity(Decimal),

    /// An exit asked for more than the item currently holds
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock {
        requested: Decimal,
        available: Decimal,
    },

    /// The storage write did not complete. In-memory state is still correct
    /// for this session but will not survive a reload; the write is not
    /// retried.
    #[error("Persistence failure: {0}")]
    Persistence(#[from] StorageError),
}

impl StoreError {
    /// Stable code for consumer-facing messaging
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::ItemNotFound(_) => "ITEM_NOT_FOUND",
            StoreError::InvalidQuantity(_) => "INVALID_QUANTITY",
            StoreError::InsufficientStock { .. } => "INSUFFICIENT_STOCK",
            StoreError::Persistence(_) => "PERSISTENCE_FAILURE",
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
