//! In-memory store using a Tokio mutex for single-node use.
//!
//! Implements every store trait over plain maps. Backs unit tests and
//! local development; production uses the PostgreSQL repositories.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_core::types::StayRange;
use stayhub_entity::booking::{Booking, BookingRoomLine, BookingStatus, CreateBooking, RoomRequest};
use stayhub_entity::inventory::InventoryRow;
use stayhub_entity::property::Property;
use stayhub_entity::room::Room;

use crate::store::{BookingStore, CatalogStore, InventoryStore};

/// Internal state for the memory store.
#[derive(Debug, Default)]
struct Inner {
    properties: HashMap<Uuid, Property>,
    rooms: HashMap<Uuid, Room>,
    /// Keyed by (room, date); the BTreeMap keeps dates ordered per room.
    inventory: BTreeMap<(Uuid, NaiveDate), InventoryRow>,
    bookings: HashMap<Uuid, Booking>,
    lines: Vec<BookingRoomLine>,
    fail_line_inserts: bool,
}

/// In-memory store over Tokio-mutex-protected maps.
///
/// Suitable for single-node use only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    /// Create an empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a property.
    pub async fn insert_property(&self, property: Property) {
        self.state
            .lock()
            .await
            .properties
            .insert(property.id, property);
    }

    /// Seed a room.
    pub async fn insert_room(&self, room: Room) {
        self.state.lock().await.rooms.insert(room.id, room);
    }

    /// Make subsequent room line inserts fail, for exercising partial
    /// persistence paths.
    pub async fn fail_line_inserts(&self, fail: bool) {
        self.state.lock().await.fail_line_inserts = fail;
    }

    /// Snapshot of all booking headers.
    pub async fn bookings(&self) -> Vec<Booking> {
        self.state.lock().await.bookings.values().cloned().collect()
    }

    /// Snapshot of all room lines.
    pub async fn room_lines(&self) -> Vec<BookingRoomLine> {
        self.state.lock().await.lines.clone()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn find_property(&self, id: Uuid) -> AppResult<Option<Property>> {
        Ok(self.state.lock().await.properties.get(&id).cloned())
    }

    async fn rooms_for_property(&self, property_id: Uuid) -> AppResult<Vec<Room>> {
        let state = self.state.lock().await;
        let mut rooms: Vec<Room> = state
            .rooms
            .values()
            .filter(|r| r.property_id == property_id)
            .cloned()
            .collect();
        rooms.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rooms)
    }

    async fn find_rooms(&self, ids: &[Uuid]) -> AppResult<Vec<Room>> {
        let state = self.state.lock().await;
        Ok(ids
            .iter()
            .filter_map(|id| state.rooms.get(id).cloned())
            .collect())
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn get_room_inventory(
        &self,
        room_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<InventoryRow>> {
        if start > end {
            return Ok(Vec::new());
        }
        let state = self.state.lock().await;
        Ok(state
            .inventory
            .range((room_id, start)..=(room_id, end))
            .map(|(_, row)| row.clone())
            .collect())
    }

    async fn stay_inventory(&self, room_id: Uuid, stay: &StayRange) -> AppResult<Vec<InventoryRow>> {
        let state = self.state.lock().await;
        Ok(state
            .inventory
            .range((room_id, stay.check_in())..(room_id, stay.check_out()))
            .map(|(_, row)| row.clone())
            .collect())
    }

    async fn check_room_availability(&self, room_id: Uuid, stay: &StayRange) -> AppResult<bool> {
        let state = self.state.lock().await;
        Ok(state
            .inventory
            .range((room_id, stay.check_in())..(room_id, stay.check_out()))
            .all(|(_, row)| row.available > 0))
    }

    async fn set_room_inventory(
        &self,
        room_id: Uuid,
        date: NaiveDate,
        available: i32,
    ) -> AppResult<InventoryRow> {
        let row = InventoryRow {
            room_id,
            date,
            available,
            updated_at: Utc::now(),
        };
        self.state
            .lock()
            .await
            .inventory
            .insert((room_id, date), row.clone());
        Ok(row)
    }

    async fn try_decrement(
        &self,
        room_id: Uuid,
        date: NaiveDate,
        quantity: u32,
    ) -> AppResult<bool> {
        let mut state = self.state.lock().await;
        match state.inventory.get_mut(&(room_id, date)) {
            Some(row) if row.available >= quantity as i32 => {
                row.available -= quantity as i32;
                row.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn create_booking(
        &self,
        new: &CreateBooking,
        status: BookingStatus,
        payment_reference: Option<&str>,
    ) -> AppResult<Booking> {
        let now = Utc::now();
        let booking = Booking {
            id: Uuid::new_v4(),
            property_id: new.property_id,
            guest_id: new.guest_id,
            check_in: new.check_in,
            check_out: new.check_out,
            adults: new.adults,
            children: new.children,
            total_price: new.total_price,
            status,
            payment_reference: payment_reference.map(str::to_string),
            created_at: now,
            updated_at: now,
        };
        self.state
            .lock()
            .await
            .bookings
            .insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn add_room_line(
        &self,
        booking_id: Uuid,
        request: &RoomRequest,
    ) -> AppResult<BookingRoomLine> {
        let mut state = self.state.lock().await;
        if state.fail_line_inserts {
            return Err(AppError::database("room line insert failed (injected)"));
        }
        let line = BookingRoomLine {
            id: Uuid::new_v4(),
            booking_id,
            room_id: request.room_id,
            quantity: request.quantity as i32,
            check_in: request.check_in,
            check_out: request.check_out,
            created_at: Utc::now(),
        };
        state.lines.push(line.clone());
        Ok(line)
    }

    async fn find_booking(&self, id: Uuid) -> AppResult<Option<Booking>> {
        Ok(self.state.lock().await.bookings.get(&id).cloned())
    }

    async fn lines_for_booking(&self, booking_id: Uuid) -> AppResult<Vec<BookingRoomLine>> {
        Ok(self
            .state
            .lock()
            .await
            .lines
            .iter()
            .filter(|l| l.booking_id == booking_id)
            .cloned()
            .collect())
    }

    async fn find_by_guest(&self, guest_id: Uuid) -> AppResult<Vec<Booking>> {
        let state = self.state.lock().await;
        let mut bookings: Vec<Booking> = state
            .bookings
            .values()
            .filter(|b| b.guest_id == guest_id)
            .cloned()
            .collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    async fn update_status(&self, id: Uuid, status: BookingStatus) -> AppResult<Booking> {
        let mut state = self.state.lock().await;
        let booking = state
            .bookings
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;
        booking.status = status;
        booking.updated_at = Utc::now();
        Ok(booking.clone())
    }

    async fn attach_payment_reference(&self, id: Uuid, reference: &str) -> AppResult<Booking> {
        let mut state = self.state.lock().await;
        let booking = state
            .bookings
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;
        booking.payment_reference = Some(reference.to_string());
        booking.updated_at = Utc::now();
        Ok(booking.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[tokio::test]
    async fn decrement_refuses_to_go_below_zero() {
        let store = MemoryStore::new();
        let room_id = Uuid::new_v4();
        store.set_room_inventory(room_id, date(1), 1).await.unwrap();

        assert!(store.try_decrement(room_id, date(1), 1).await.unwrap());
        // A second decrement finds no unit left and must not apply.
        assert!(!store.try_decrement(room_id, date(1), 1).await.unwrap());

        let rows = store
            .get_room_inventory(room_id, date(1), date(1))
            .await
            .unwrap();
        assert_eq!(rows[0].available, 0);
    }

    #[tokio::test]
    async fn decrement_on_missing_row_reports_no_match() {
        let store = MemoryStore::new();
        assert!(
            !store
                .try_decrement(Uuid::new_v4(), date(1), 1)
                .await
                .unwrap()
        );
    }
}
