//! Stock movement models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::DateRange;

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Entry,
    Exit,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Entry => "entry",
            MovementKind::Exit => "exit",
        }
    }
}

impl std::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded entry or exit against a fabric item
///
/// Movements are append-only: once recorded they are never edited or removed,
/// and they outlive deletion of the item they reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movement {
    pub id: Uuid,
    /// Weak reference; the item may have been deleted since
    pub item_id: Uuid,
    pub kind: MovementKind,
    pub quantity: Decimal,
    pub reason: String,
    pub recorded_by: String,
    pub notes: Option<String>,
    /// Price per meter at the time of the movement, when known
    pub unit_price: Option<Decimal>,
    pub recorded_at: DateTime<Utc>,
}

/// Caller-supplied part of a movement record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementDraft {
    pub quantity: Decimal,
    pub reason: String,
    pub recorded_by: String,
    pub notes: Option<String>,
    pub unit_price: Option<Decimal>,
}

impl MovementDraft {
    pub fn new(
        quantity: Decimal,
        reason: impl Into<String>,
        recorded_by: impl Into<String>,
    ) -> Self {
        Self {
            quantity,
            reason: reason.into(),
            recorded_by: recorded_by.into(),
            notes: None,
            unit_price: None,
        }
    }
}

/// Criteria for querying the movement ledger
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovementFilter {
    pub kind: Option<MovementKind>,
    /// Inclusive range of local calendar dates
    pub dates: Option<DateRange>,
    /// Substring match against the referenced item's name
    pub item_query: Option<String>,
}
