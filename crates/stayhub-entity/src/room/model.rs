//! Room entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::property::Property;

/// A bookable room category within a property.
///
/// A room is a category (e.g. "Deluxe Double"), not a physical unit; the
/// number of units bookable on a given date lives in the inventory table.
/// Per-unit occupancy is capped by the shared
/// [`UNIT_MAX_OCCUPANCY`](stayhub_core::types::UNIT_MAX_OCCUPANCY) constant.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    /// Unique room identifier.
    pub id: Uuid,
    /// The property this room belongs to.
    pub property_id: Uuid,
    /// Display name.
    pub name: String,
    /// Per-night base price; falls back to the property price when unset.
    pub base_price: Option<i64>,
    /// Amenity labels shown to guests.
    pub amenities: Vec<String>,
    /// When the room was created.
    pub created_at: DateTime<Utc>,
    /// When the room was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Effective nightly price: the room's own price, or the owning
    /// property's fallback price.
    pub fn effective_price(&self, property: &Property) -> i64 {
        self.base_price.unwrap_or(property.base_price)
    }
}
