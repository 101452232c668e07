//! Booking entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use stayhub_core::AppResult;
use stayhub_core::types::StayRange;

use crate::booking::status::BookingStatus;

/// A reservation header.
///
/// Created exactly once per checkout. The only later mutation is a status
/// transition; room lines and inventory are never touched again through
/// this entity. Cancellation does not restock inventory.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// The property the stay is at.
    pub property_id: Uuid,
    /// The guest who booked.
    pub guest_id: Uuid,
    /// First night of the stay (inclusive).
    pub check_in: NaiveDate,
    /// Departure date (exclusive of the final night).
    pub check_out: NaiveDate,
    /// Booking-wide adult count.
    pub adults: i32,
    /// Booking-wide child count.
    pub children: i32,
    /// Quoted total in integer currency units.
    pub total_price: i64,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Opaque reference supplied by the external payment processor.
    /// Stored verbatim; authenticity is not validated here.
    pub payment_reference: Option<String>,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// When the booking was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// The stay range of this booking.
    pub fn stay(&self) -> AppResult<StayRange> {
        StayRange::new(self.check_in, self.check_out)
    }
}

/// Data required to create a new booking header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooking {
    /// The property the stay is at.
    pub property_id: Uuid,
    /// The guest who is booking.
    pub guest_id: Uuid,
    /// First night of the stay (inclusive).
    pub check_in: NaiveDate,
    /// Departure date (exclusive).
    pub check_out: NaiveDate,
    /// Booking-wide adult count.
    pub adults: i32,
    /// Booking-wide child count.
    pub children: i32,
    /// Quoted total in integer currency units.
    pub total_price: i64,
}
