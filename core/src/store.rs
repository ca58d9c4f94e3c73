//! The inventory store: authoritative in-memory state and its operations

use chrono::{Local, Utc};
use rust_decimal::Decimal;
use shared::{
    FabricItem, InventoryStats, ItemPatch, Movement, MovementDraft, MovementFilter, MovementKind,
    MovementTotals, NewItem,
};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::repository::InventoryRepository;
use crate::stats;

/// Emitted to subscribers after a committed mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    ItemsChanged,
    MovementsChanged,
}

/// Handle returned by [`InventoryStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(StoreEvent)>;

/// Exclusive owner of the fabric items and the movement ledger
///
/// All operations run synchronously on the calling thread and persist through
/// the repository before returning. Consumers read snapshots and never hold a
/// writable reference to the collections. [`InventoryStore::open`] is the
/// load point; [`InventoryStore::flush`] is the teardown point.
pub struct InventoryStore {
    items: Vec<FabricItem>,
    movements: Vec<Movement>,
    repository: InventoryRepository,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl InventoryStore {
    /// Load both collections from storage and take ownership of them
    pub fn open(repository: InventoryRepository) -> Self {
        let (items, movements) = repository.load();
        tracing::info!(
            items = items.len(),
            movements = movements.len(),
            "inventory loaded"
        );
        Self {
            items,
            movements,
            repository,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    // ------------------------------------------------------------------
    // Item operations
    // ------------------------------------------------------------------

    /// Register a new fabric item and return its id
    ///
    /// The store assigns the id and ingestion timestamp. Drafts are taken as
    /// given; required-field validation is the form layer's responsibility.
    pub fn add_item(&mut self, draft: NewItem) -> StoreResult<Uuid> {
        let id = Uuid::new_v4();
        let item = FabricItem {
            id,
            name: draft.name,
            category: draft.category,
            color: draft.color,
            material: draft.material,
            // Floor at zero so a bad draft cannot break the stock invariant.
            quantity: draft.quantity.max(Decimal::ZERO),
            price_per_meter: draft.price_per_meter,
            min_stock: draft.min_stock,
            supplier: draft.supplier,
            image_url: draft.image_url,
            notes: draft.notes,
            created_at: Utc::now(),
        };
        self.items.push(item);
        tracing::debug!(%id, "fabric item added");

        let persisted = self.persist_items();
        self.notify(StoreEvent::ItemsChanged);
        persisted.map(|_| id)
    }

    /// Merge the given fields into the item matching `id`
    ///
    /// The id and ingestion timestamp are never touched; a quantity patch is
    /// floored at zero like every other stock write.
    pub fn update_item(&mut self, id: Uuid, patch: ItemPatch) -> StoreResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::ItemNotFound(id))?;

        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if let Some(color) = patch.color {
            item.color = color;
        }
        if let Some(material) = patch.material {
            item.material = material;
        }
        if let Some(quantity) = patch.quantity {
            item.quantity = quantity.max(Decimal::ZERO);
        }
        if let Some(price_per_meter) = patch.price_per_meter {
            item.price_per_meter = price_per_meter;
        }
        if let Some(min_stock) = patch.min_stock {
            item.min_stock = min_stock;
        }
        if let Some(supplier) = patch.supplier {
            item.supplier = supplier;
        }
        if let Some(image_url) = patch.image_url {
            item.image_url = Some(image_url);
        }
        if let Some(notes) = patch.notes {
            item.notes = Some(notes);
        }
        tracing::debug!(%id, "fabric item updated");

        let persisted = self.persist_items();
        self.notify(StoreEvent::ItemsChanged);
        persisted
    }

    /// Remove the item matching `id`; its movement history stays in the ledger
    pub fn delete_item(&mut self, id: Uuid) -> StoreResult<()> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return Err(StoreError::ItemNotFound(id));
        }
        tracing::debug!(%id, "fabric item deleted");

        let persisted = self.persist_items();
        self.notify(StoreEvent::ItemsChanged);
        persisted
    }

    // ------------------------------------------------------------------
    // Movement operations
    // ------------------------------------------------------------------

    /// Record a stock increase against an item and return the movement id
    pub fn record_entry(&mut self, item_id: Uuid, draft: MovementDraft) -> StoreResult<Uuid> {
        self.record_movement(item_id, MovementKind::Entry, draft)
    }

    /// Record a stock decrease against an item and return the movement id
    ///
    /// Fails with [`StoreError::InsufficientStock`] when the requested
    /// quantity exceeds what is on hand; stock can never go negative through
    /// this path.
    pub fn record_exit(&mut self, item_id: Uuid, draft: MovementDraft) -> StoreResult<Uuid> {
        self.record_movement(item_id, MovementKind::Exit, draft)
    }

    fn record_movement(
        &mut self,
        item_id: Uuid,
        kind: MovementKind,
        draft: MovementDraft,
    ) -> StoreResult<Uuid> {
        // Validation happens strictly before any mutation.
        let index = self
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or(StoreError::ItemNotFound(item_id))?;

        let quantity = draft.quantity;
        if quantity <= Decimal::ZERO {
            return Err(StoreError::InvalidQuantity(quantity));
        }
        if kind == MovementKind::Exit && quantity > self.items[index].quantity {
            return Err(StoreError::InsufficientStock {
                requested: quantity,
                available: self.items[index].quantity,
            });
        }

        let id = Uuid::new_v4();
        self.movements.push(Movement {
            id,
            item_id,
            kind,
            quantity,
            reason: draft.reason,
            recorded_by: draft.recorded_by,
            notes: draft.notes,
            unit_price: draft.unit_price,
            recorded_at: Utc::now(),
        });

        let item = &mut self.items[index];
        item.quantity = match kind {
            MovementKind::Entry => item.quantity + quantity,
            // The insufficient-stock check keeps this from going below zero;
            // the floor stays as a last line of defense.
            MovementKind::Exit => (item.quantity - quantity).max(Decimal::ZERO),
        };
        tracing::debug!(movement = %id, item = %item_id, kind = %kind, quantity = %quantity, "movement recorded");

        let movements_saved = self.persist_movements();
        let items_saved = self.persist_items();
        self.notify(StoreEvent::MovementsChanged);
        self.notify(StoreEvent::ItemsChanged);
        movements_saved.and(items_saved).map(|_| id)
    }

    // ------------------------------------------------------------------
    // Read surface
    // ------------------------------------------------------------------

    /// The item matching `id`, if it is still in the collection
    pub fn item(&self, id: Uuid) -> Option<&FabricItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Current item collection, in insertion order
    pub fn items(&self) -> &[FabricItem] {
        &self.items
    }

    /// The full movement ledger, in append order
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Items whose name, category, color or material contains the query,
    /// case-insensitively; an empty query returns everything. Insertion
    /// order is preserved.
    pub fn filter_items(&self, query: &str) -> Vec<&FabricItem> {
        if query.is_empty() {
            return self.items.iter().collect();
        }
        self.items
            .iter()
            .filter(|item| item.matches_query(query))
            .collect()
    }

    /// Items with stock on hand; the exit form only offers these
    pub fn in_stock_items(&self) -> Vec<&FabricItem> {
        self.items
            .iter()
            .filter(|item| item.quantity > Decimal::ZERO)
            .collect()
    }

    /// Items at or below their minimum stock threshold
    pub fn low_stock_items(&self) -> Vec<&FabricItem> {
        self.items.iter().filter(|item| item.is_low_stock()).collect()
    }

    /// Ledger entries for one item, newest first
    ///
    /// Also answers for deleted items, which keep their history.
    pub fn movements_for_item(&self, item_id: Uuid) -> Vec<&Movement> {
        let mut result: Vec<&Movement> = self
            .movements
            .iter()
            .filter(|movement| movement.item_id == item_id)
            .collect();
        result.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        result
    }

    /// Filtered view of the ledger, newest first
    ///
    /// A name query matches against the referenced item's current name; a
    /// movement whose item has been deleted only matches an empty query.
    pub fn movement_history(&self, filter: &MovementFilter) -> Vec<&Movement> {
        let mut result: Vec<&Movement> = self
            .movements
            .iter()
            .filter(|movement| self.matches_filter(movement, filter))
            .collect();
        result.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        result
    }

    /// The most recent movements, newest first
    pub fn recent_movements(&self, limit: usize) -> Vec<&Movement> {
        let mut result: Vec<&Movement> = self.movements.iter().collect();
        result.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        result.truncate(limit);
        result
    }

    /// Recompute the aggregate statistics from current state; no caching
    pub fn statistics(&self) -> InventoryStats {
        stats::inventory_stats(&self.items, &self.movements, Local::now())
    }

    /// Recompute the movement ledger aggregates
    pub fn movement_totals(&self) -> MovementTotals {
        stats::movement_totals(&self.movements, Local::now())
    }

    // ------------------------------------------------------------------
    // Lifecycle and subscriptions
    // ------------------------------------------------------------------

    /// Write both collections out once more; the teardown point
    pub fn flush(&mut self) -> StoreResult<()> {
        let items = self.repository.save_items(&self.items);
        let movements = self.repository.save_movements(&self.movements);
        items.and(movements).map_err(StoreError::from)
    }

    /// Register a callback invoked after every committed mutation
    pub fn subscribe(&mut self, listener: impl Fn(StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a previously registered callback
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    fn matches_filter(&self, movement: &Movement, filter: &MovementFilter) -> bool {
        if let Some(kind) = filter.kind {
            if movement.kind != kind {
                return false;
            }
        }
        if let Some(dates) = &filter.dates {
            let day = movement.recorded_at.with_timezone(&Local).date_naive();
            if !dates.contains(day) {
                return false;
            }
        }
        if let Some(query) = &filter.item_query {
            if !query.is_empty() {
                let name = self
                    .item(movement.item_id)
                    .map(|item| item.name.to_lowercase())
                    .unwrap_or_default();
                if !name.contains(&query.to_lowercase()) {
                    return false;
                }
            }
        }
        true
    }

    fn notify(&self, event: StoreEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    fn persist_items(&mut self) -> StoreResult<()> {
        self.repository.save_items(&self.items).map_err(|err| {
            tracing::warn!(error = %err, "item collection write failed; state kept in memory");
            StoreError::from(err)
        })
    }

    fn persist_movements(&mut self) -> StoreResult<()> {
        self.repository.save_movements(&self.movements).map_err(|err| {
            tracing::warn!(error = %err, "movement ledger write failed; state kept in memory");
            StoreError::from(err)
        })
    }
}
