//! Booking room line (junction) entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One room reservation line under a booking header.
///
/// A multi-room booking carries one line per requested room, each with the
/// number of units reserved from that room for the stay.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingRoomLine {
    /// Unique line identifier.
    pub id: Uuid,
    /// The owning booking header.
    pub booking_id: Uuid,
    /// The reserved room.
    pub room_id: Uuid,
    /// Units reserved from that room.
    pub quantity: i32,
    /// First night (inclusive).
    pub check_in: NaiveDate,
    /// Departure date (exclusive).
    pub check_out: NaiveDate,
    /// When the line was created.
    pub created_at: DateTime<Utc>,
}
