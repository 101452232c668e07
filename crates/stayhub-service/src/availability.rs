//! Multi-room availability checking.

use std::sync::Arc;

use tracing::debug;

use stayhub_core::AppResult;
use stayhub_database::store::InventoryStore;
use stayhub_entity::booking::RoomRequest;

/// Gates checkout on per-date unit availability.
#[derive(Clone)]
pub struct AvailabilityService {
    inventory: Arc<dyn InventoryStore>,
}

impl AvailabilityService {
    /// Create a new availability service.
    pub fn new(inventory: Arc<dyn InventoryStore>) -> Self {
        Self { inventory }
    }

    /// Check whether every request can be satisfied.
    ///
    /// Requests are evaluated in order; the first date found with fewer
    /// units than requested fails the whole batch and the remaining
    /// requests are not examined. Dates with no inventory row never
    /// reach the comparison, so a room with no seeded rows passes
    /// vacuously — callers must pre-seed the bookable horizon for the
    /// check to mean anything.
    pub async fn check_multi_room_availability(
        &self,
        requests: &[RoomRequest],
    ) -> AppResult<bool> {
        for request in requests {
            let stay = request.stay()?;
            let rows = self.inventory.stay_inventory(request.room_id, &stay).await?;
            if let Some(row) = rows
                .iter()
                .find(|row| row.available < request.quantity as i32)
            {
                debug!(
                    room_id = %request.room_id,
                    date = %row.date,
                    available = row.available,
                    requested = request.quantity,
                    "Insufficient inventory"
                );
                return Ok(false);
            }
        }
        Ok(true)
    }
}
