//! Persistence adapter for the item and movement collections
//!
//! Two named blobs, serialized as JSON, fully replaced on every save. A
//! missing or unparsable blob loads as an empty collection so the tracker
//! always starts in a usable state instead of refusing to run.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared::{FabricItem, Movement};

use crate::storage::{StorageBackend, StorageError};

/// Storage key for the item collection
pub const ITEMS_KEY: &str = "inventory-items";

/// Storage key for the movement ledger
pub const MOVEMENTS_KEY: &str = "inventory-movements";

/// Version written into every saved blob
const SCHEMA_VERSION: u32 = 1;

/// Versioned wrapper parsed on load
#[derive(Deserialize)]
struct Envelope<T> {
    schema_version: u32,
    records: Vec<T>,
}

/// Versioned wrapper written on save
#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    schema_version: u32,
    records: &'a [T],
}

/// Reads and writes the two collections through a storage backend
pub struct InventoryRepository {
    backend: Box<dyn StorageBackend>,
}

impl InventoryRepository {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Load both collections; a missing or malformed blob for either key
    /// yields an empty collection for that key and never fails the load
    pub fn load(&self) -> (Vec<FabricItem>, Vec<Movement>) {
        let items = self.load_collection::<FabricItem>(ITEMS_KEY);
        let movements = self.load_collection::<Movement>(MOVEMENTS_KEY);
        (items, movements)
    }

    /// Serialize the item collection and fully replace its blob
    pub fn save_items(&mut self, items: &[FabricItem]) -> Result<(), StorageError> {
        self.save_collection(ITEMS_KEY, items)
    }

    /// Serialize the movement ledger and fully replace its blob
    pub fn save_movements(&mut self, movements: &[Movement]) -> Result<(), StorageError> {
        self.save_collection(MOVEMENTS_KEY, movements)
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(key, error = %err, "could not read blob, starting empty");
                return Vec::new();
            }
        };

        if let Ok(envelope) = serde_json::from_str::<Envelope<T>>(&raw) {
            if envelope.schema_version > SCHEMA_VERSION {
                tracing::warn!(
                    key,
                    version = envelope.schema_version,
                    "blob written by a newer version, loading best-effort"
                );
            }
            return envelope.records;
        }

        // Blobs written before versioning are a bare record array; they load
        // as-is and are upgraded to the envelope on the next save.
        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding malformed blob");
                Vec::new()
            }
        }
    }

    fn save_collection<T: Serialize>(
        &mut self,
        key: &str,
        records: &[T],
    ) -> Result<(), StorageError> {
        let envelope = EnvelopeRef {
            schema_version: SCHEMA_VERSION,
            records,
        };
        let serialized = serde_json::to_string(&envelope)
            .map_err(|err| StorageError::WriteFailed(err.to_string()))?;
        self.backend.write(key, &serialized)
    }
}
