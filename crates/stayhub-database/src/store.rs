//! Store traits for the booking engine.
//!
//! Services depend on these traits rather than on concrete repositories,
//! so the same logic runs against PostgreSQL in production and against
//! [`MemoryStore`](crate::memory::MemoryStore) in tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use stayhub_core::AppResult;
use stayhub_core::types::StayRange;
use stayhub_entity::booking::{Booking, BookingRoomLine, BookingStatus, CreateBooking, RoomRequest};
use stayhub_entity::inventory::InventoryRow;
use stayhub_entity::property::Property;
use stayhub_entity::room::Room;

/// Read access to properties and rooms.
#[async_trait]
pub trait CatalogStore: Send + Sync + 'static {
    /// Find a property by ID.
    async fn find_property(&self, id: Uuid) -> AppResult<Option<Property>>;

    /// All rooms of a property.
    async fn rooms_for_property(&self, property_id: Uuid) -> AppResult<Vec<Room>>;

    /// Look up a set of rooms by ID. Missing IDs are simply absent from
    /// the result; the caller decides whether that is an error.
    async fn find_rooms(&self, ids: &[Uuid]) -> AppResult<Vec<Room>>;
}

/// Per-(room, date) inventory primitives.
///
/// Note the deliberate asymmetry kept from the original contract:
/// [`get_room_inventory`](InventoryStore::get_room_inventory) takes an
/// **inclusive** end date while the stay-oriented reads use the
/// exclusive-end `[check_in, check_out)` convention. Dates with no row
/// are treated as available throughout ("vacuous availability").
#[async_trait]
pub trait InventoryStore: Send + Sync + 'static {
    /// Rows for dates in the inclusive range `[start, end]`, ordered by date.
    async fn get_room_inventory(
        &self,
        room_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<InventoryRow>>;

    /// Rows for the stay dates `[check_in, check_out)`, ordered by date.
    async fn stay_inventory(&self, room_id: Uuid, stay: &StayRange) -> AppResult<Vec<InventoryRow>>;

    /// True iff no stay date has a row with `available <= 0`.
    /// Quantity-unaware; answers "at least one unit free every night".
    async fn check_room_availability(&self, room_id: Uuid, stay: &StayRange) -> AppResult<bool>;

    /// Idempotent upsert keyed by `(room_id, date)`. No maximum is
    /// enforced; operators may set any non-negative count.
    async fn set_room_inventory(
        &self,
        room_id: Uuid,
        date: NaiveDate,
        available: i32,
    ) -> AppResult<InventoryRow>;

    /// Conditionally decrement `available` by `quantity` for one date.
    ///
    /// Returns `Ok(true)` iff a row matched with `available >= quantity`
    /// and was decremented. The condition is evaluated atomically in the
    /// store, so concurrent bookings cannot drive `available` negative.
    async fn try_decrement(
        &self,
        room_id: Uuid,
        date: NaiveDate,
        quantity: u32,
    ) -> AppResult<bool>;
}

/// Booking header and room line persistence.
#[async_trait]
pub trait BookingStore: Send + Sync + 'static {
    /// Insert a booking header.
    async fn create_booking(
        &self,
        new: &CreateBooking,
        status: BookingStatus,
        payment_reference: Option<&str>,
    ) -> AppResult<Booking>;

    /// Insert one room line under a booking header.
    async fn add_room_line(
        &self,
        booking_id: Uuid,
        request: &RoomRequest,
    ) -> AppResult<BookingRoomLine>;

    /// Find a booking by ID.
    async fn find_booking(&self, id: Uuid) -> AppResult<Option<Booking>>;

    /// All room lines of a booking.
    async fn lines_for_booking(&self, booking_id: Uuid) -> AppResult<Vec<BookingRoomLine>>;

    /// All bookings of a guest, newest first.
    async fn find_by_guest(&self, guest_id: Uuid) -> AppResult<Vec<Booking>>;

    /// Transition a booking's status and return the updated row.
    async fn update_status(&self, id: Uuid, status: BookingStatus) -> AppResult<Booking>;

    /// Attach the opaque payment processor reference to a booking.
    async fn attach_payment_reference(&self, id: Uuid, reference: &str) -> AppResult<Booking>;
}
