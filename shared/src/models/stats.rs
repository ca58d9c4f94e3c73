//! Derived inventory statistics
//!
//! These are never persisted; they are recomputed from the current item and
//! movement collections on every read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate snapshot of the whole inventory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryStats {
    pub total_items: usize,
    /// Sum of quantity times price per meter over all items
    pub total_value: Decimal,
    /// Items at or below their minimum stock threshold
    pub low_stock: usize,
    /// Movements recorded today, local time
    pub movements_today: usize,
}

/// Aggregates over the movement ledger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovementTotals {
    /// Total quantity brought in across all entry movements
    pub entered: Decimal,
    /// Total quantity taken out across all exit movements
    pub withdrawn: Decimal,
    pub today: usize,
    pub last_seven_days: usize,
}
