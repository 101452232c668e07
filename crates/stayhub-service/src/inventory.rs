//! Inventory reads and writes, including the per-property prefetch.

use std::sync::Arc;

use chrono::NaiveDate;
use futures::future;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use stayhub_core::AppResult;
use stayhub_core::types::StayRange;
use stayhub_database::store::{CatalogStore, InventoryStore};
use stayhub_entity::inventory::InventoryRow;
use stayhub_entity::room::Room;

/// A room together with its inventory rows for a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomInventory {
    /// The room.
    pub room: Room,
    /// Rows in date order; dates without a row are absent.
    pub rows: Vec<InventoryRow>,
}

/// Inventory operations offered to display and admin flows.
#[derive(Clone)]
pub struct InventoryService {
    inventory: Arc<dyn InventoryStore>,
    catalog: Arc<dyn CatalogStore>,
}

impl InventoryService {
    /// Create a new inventory service.
    pub fn new(inventory: Arc<dyn InventoryStore>, catalog: Arc<dyn CatalogStore>) -> Self {
        Self { inventory, catalog }
    }

    /// Rows for one room over the inclusive range `[start, end]`.
    pub async fn get_room_inventory(
        &self,
        room_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<InventoryRow>> {
        self.inventory.get_room_inventory(room_id, start, end).await
    }

    /// True iff every stay date has at least one unit free.
    pub async fn check_room_availability(
        &self,
        room_id: Uuid,
        stay: &StayRange,
    ) -> AppResult<bool> {
        self.inventory.check_room_availability(room_id, stay).await
    }

    /// Upsert the available unit count for one room and date.
    pub async fn set_room_inventory(
        &self,
        room_id: Uuid,
        date: NaiveDate,
        available: i32,
    ) -> AppResult<InventoryRow> {
        let row = self
            .inventory
            .set_room_inventory(room_id, date, available)
            .await?;
        info!(room_id = %room_id, date = %date, available, "Inventory set");
        Ok(row)
    }

    /// Inventory for every room of a property over `[start, end]`.
    ///
    /// The per-room reads are independent and fire concurrently; results
    /// are joined in room order. Read-only — used to paint availability
    /// calendars.
    pub async fn property_inventory(
        &self,
        property_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<RoomInventory>> {
        let rooms = self.catalog.rooms_for_property(property_id).await?;

        let reads = rooms
            .iter()
            .map(|room| self.inventory.get_room_inventory(room.id, start, end));
        let results = future::try_join_all(reads).await?;

        Ok(rooms
            .into_iter()
            .zip(results)
            .map(|(room, rows)| RoomInventory { room, rows })
            .collect())
    }
}
