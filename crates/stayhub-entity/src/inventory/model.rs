//! Per-date room inventory entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Bookable unit count for one room on one calendar date.
///
/// The `available` column is authoritative — it is not derived by summing
/// active bookings. Rows are written only through the idempotent upsert
/// and decremented by the booking orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InventoryRow {
    /// The room this row belongs to.
    pub room_id: Uuid,
    /// The calendar date this row covers.
    pub date: NaiveDate,
    /// Bookable units remaining; never negative.
    pub available: i32,
    /// When the row was last written.
    pub updated_at: DateTime<Utc>,
}
