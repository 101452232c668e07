//! Room request value objects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stayhub_core::AppResult;
use stayhub_core::types::StayRange;

/// One room-and-date-range line of a multi-room availability or booking
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRequest {
    /// The requested room.
    pub room_id: Uuid,
    /// Units requested from that room.
    pub quantity: u32,
    /// First night (inclusive).
    pub check_in: NaiveDate,
    /// Departure date (exclusive).
    pub check_out: NaiveDate,
}

impl RoomRequest {
    /// The stay range of this request.
    pub fn stay(&self) -> AppResult<StayRange> {
        StayRange::new(self.check_in, self.check_out)
    }
}

/// A room and unit count selected for a quote, before dates are attached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoomSelection {
    /// The selected room.
    pub room_id: Uuid,
    /// Units requested from that room.
    pub quantity: u32,
}
