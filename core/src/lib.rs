//! Inventory state manager for the Fabric Inventory Tracker
//!
//! Owns the fabric item collection and the movement ledger, enforces the
//! relationship between them (a movement mutates exactly one item's stock),
//! computes derived statistics, and persists the state through a pluggable
//! key-value storage backend. All operations are synchronous; there is one
//! writer and no background work.

pub mod error;
pub mod repository;
pub mod storage;
pub mod store;

mod stats;

pub use error::{StoreError, StoreResult};
pub use repository::InventoryRepository;
pub use storage::{FileBackend, MemoryBackend, StorageBackend, StorageError};
pub use store::{InventoryStore, StoreEvent, SubscriptionId};
