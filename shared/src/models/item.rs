//! Fabric item models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Image shown for items registered without a photo
pub const PLACEHOLDER_IMAGE_URL: &str = "/images/fabric-placeholder.svg";

/// A stocked fabric type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FabricItem {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub color: String,
    pub material: String,
    /// Meters currently on hand; the store keeps this non-negative
    pub quantity: Decimal,
    pub price_per_meter: Decimal,
    /// Threshold at or below which the item counts as low stock
    pub min_stock: Decimal,
    pub supplier: String,
    pub image_url: Option<String>,
    pub notes: Option<String>,
    /// Ingestion timestamp, assigned once at registration
    pub created_at: DateTime<Utc>,
}

impl FabricItem {
    /// Whether the on-hand quantity is at or below the configured minimum
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }

    /// Value of the stock on hand at the current price per meter
    pub fn stock_value(&self) -> Decimal {
        self.quantity * self.price_per_meter
    }

    /// Image to display, falling back to the shared placeholder
    pub fn image_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE_URL)
    }

    /// Case-insensitive substring match over name, category, color and material
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
            || self.color.to_lowercase().contains(&query)
            || self.material.to_lowercase().contains(&query)
    }
}

/// Draft for registering a new fabric item
///
/// The id and ingestion timestamp are assigned by the store. The store takes
/// drafts as given; required-field checks belong to the form layer, which can
/// run them through [`Validate`] before submitting.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewItem {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "color is required"))]
    pub color: String,
    #[validate(length(min = 1, message = "material is required"))]
    pub material: String,
    pub quantity: Decimal,
    pub price_per_meter: Decimal,
    pub min_stock: Decimal,
    #[validate(length(min = 1, message = "supplier is required"))]
    pub supplier: String,
    pub image_url: Option<String>,
    pub notes: Option<String>,
}

/// Partial update for an existing item
///
/// Fields left as `None` keep their current value. The id and ingestion
/// timestamp are not part of the patch and can never be overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub quantity: Option<Decimal>,
    pub price_per_meter: Option<Decimal>,
    pub min_stock: Option<Decimal>,
    pub supplier: Option<String>,
    pub image_url: Option<String>,
    pub notes: Option<String>,
}
