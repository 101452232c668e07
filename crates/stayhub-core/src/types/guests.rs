//! Guest count value types.

use serde::{Deserialize, Serialize};

/// Maximum guests a single room unit can hold.
///
/// Shared across all rooms; not per-room configurable.
pub const UNIT_MAX_OCCUPANCY: u32 = 4;

/// Booking-wide adult and child totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestCount {
    /// Number of adults.
    pub adults: u32,
    /// Number of children.
    pub children: u32,
}

impl GuestCount {
    /// Create a new guest count.
    pub fn new(adults: u32, children: u32) -> Self {
        Self { adults, children }
    }

    /// Total number of guests.
    pub fn total(&self) -> u32 {
        self.adults + self.children
    }

    /// Whether no guests remain.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
