//! Property entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A bookable property. Owns zero or more rooms.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Property {
    /// Unique property identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Fallback nightly base price, used for rooms without their own price.
    pub base_price: i64,
    /// Maximum guests the property can host.
    pub max_guests: i32,
    /// Number of bedrooms.
    pub max_bedrooms: i32,
    /// When the property was created.
    pub created_at: DateTime<Utc>,
    /// When the property was last updated.
    pub updated_at: DateTime<Utc>,
}
