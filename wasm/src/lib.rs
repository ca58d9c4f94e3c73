//! WebAssembly module for the Fabric Inventory Tracker
//!
//! Wires the inventory store to the browser: state persists in
//! `window.localStorage`, arguments and results cross the boundary as JSON
//! strings, and store failures surface as JS `Error` values whose `name`
//! carries the stable error code.

use fabric_inventory_core::{
    InventoryRepository, InventoryStore, StorageBackend, StorageError, StoreError,
};
use shared::{ItemPatch, MovementDraft, MovementFilter, NewItem};
use uuid::Uuid;
use wasm_bindgen::prelude::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// `window.localStorage` as a storage backend
struct LocalStorageBackend {
    storage: web_sys::Storage,
}

impl LocalStorageBackend {
    fn open() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|_| StorageError::Unavailable("localStorage not accessible".to_string()))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl StorageBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|_| StorageError::Unavailable("localStorage read failed".to_string()))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // set_item rejects the write when the quota is exhausted.
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed("localStorage write rejected".to_string()))
    }
}

/// The inventory store, wired to the browser's localStorage
#[wasm_bindgen]
pub struct InventoryApp {
    store: InventoryStore,
}

#[wasm_bindgen]
impl InventoryApp {
    /// Open the store, loading any previously saved state
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<InventoryApp, JsValue> {
        let backend = LocalStorageBackend::open().map_err(storage_error)?;
        let store = InventoryStore::open(InventoryRepository::new(backend));
        Ok(InventoryApp { store })
    }

    /// Current item collection as a JSON array, in insertion order
    pub fn items(&self) -> Result<String, JsValue> {
        to_json(&self.store.items())
    }

    /// The full movement ledger as a JSON array, in append order
    pub fn movements(&self) -> Result<String, JsValue> {
        to_json(&self.store.movements())
    }

    /// Aggregate statistics, recomputed from current state
    pub fn statistics(&self) -> Result<String, JsValue> {
        to_json(&self.store.statistics())
    }

    /// Entry/exit totals and recency counters for the history view
    pub fn movement_totals(&self) -> Result<String, JsValue> {
        to_json(&self.store.movement_totals())
    }

    /// Items at or below their minimum stock threshold
    pub fn low_stock_items(&self) -> Result<String, JsValue> {
        to_json(&self.store.low_stock_items())
    }

    /// Items matching the search box query
    pub fn filter_items(&self, query: &str) -> Result<String, JsValue> {
        to_json(&self.store.filter_items(query))
    }

    /// Filtered movement history, newest first
    pub fn movement_history(&self, filter_json: &str) -> Result<String, JsValue> {
        let filter: MovementFilter = parse_json(filter_json)?;
        to_json(&self.store.movement_history(&filter))
    }

    /// The most recent movements for the dashboard activity feed
    pub fn recent_movements(&self, limit: usize) -> Result<String, JsValue> {
        to_json(&self.store.recent_movements(limit))
    }

    /// Register a new item; returns its id
    pub fn add_item(&mut self, draft_json: &str) -> Result<String, JsValue> {
        let draft: NewItem = parse_json(draft_json)?;
        let id = self.store.add_item(draft).map_err(store_error)?;
        Ok(id.to_string())
    }

    /// Merge the given fields into an existing item
    pub fn update_item(&mut self, id: &str, patch_json: &str) -> Result<(), JsValue> {
        let id = parse_id(id)?;
        let patch: ItemPatch = parse_json(patch_json)?;
        self.store.update_item(id, patch).map_err(store_error)
    }

    /// Remove an item; its movement history stays in the ledger
    pub fn delete_item(&mut self, id: &str) -> Result<(), JsValue> {
        let id = parse_id(id)?;
        self.store.delete_item(id).map_err(store_error)
    }

    /// Record a stock entry; returns the movement id
    pub fn record_entry(&mut self, item_id: &str, draft_json: &str) -> Result<String, JsValue> {
        let item_id = parse_id(item_id)?;
        let draft: MovementDraft = parse_json(draft_json)?;
        let id = self.store.record_entry(item_id, draft).map_err(store_error)?;
        Ok(id.to_string())
    }

    /// Record a stock exit; returns the movement id
    pub fn record_exit(&mut self, item_id: &str, draft_json: &str) -> Result<String, JsValue> {
        let item_id = parse_id(item_id)?;
        let draft: MovementDraft = parse_json(draft_json)?;
        let id = self.store.record_exit(item_id, draft).map_err(store_error)?;
        Ok(id.to_string())
    }

    /// Write both collections out once more; call before page teardown
    pub fn flush(&mut self) -> Result<(), JsValue> {
        self.store.flush().map_err(store_error)
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|err| named_error("SERIALIZE_ERROR", &err.to_string()))
}

fn parse_json<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, JsValue> {
    serde_json::from_str(json)
        .map_err(|err| named_error("INVALID_PAYLOAD", &format!("Invalid JSON payload: {}", err)))
}

fn parse_id(raw: &str) -> Result<Uuid, JsValue> {
    Uuid::parse_str(raw).map_err(|_| named_error("INVALID_ID", &format!("Not a valid id: {}", raw)))
}

fn store_error(err: StoreError) -> JsValue {
    named_error(err.code(), &err.to_string())
}

fn storage_error(err: StorageError) -> JsValue {
    named_error("STORAGE_UNAVAILABLE", &err.to_string())
}

fn named_error(name: &str, message: &str) -> JsValue {
    let error = js_sys::Error::new(message);
    error.set_name(name);
    error.into()
}
