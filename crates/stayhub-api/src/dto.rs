//! Request and response DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use stayhub_entity::booking::{Booking, BookingRoomLine, RoomRequest, RoomSelection};

/// Inclusive date range query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct DateRangeQuery {
    /// Range start (inclusive).
    pub start: NaiveDate,
    /// Range end (inclusive).
    pub end: NaiveDate,
}

/// Stay date query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct StayQuery {
    /// First night (inclusive).
    pub check_in: NaiveDate,
    /// Departure date (exclusive).
    pub check_out: NaiveDate,
}

/// Body for the inventory upsert.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetInventoryRequest {
    /// The date to set.
    pub date: NaiveDate,
    /// Bookable unit count.
    #[validate(range(min = 0))]
    pub available: i32,
}

/// One room line of an availability or booking request.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RoomRequestDto {
    /// The requested room.
    pub room_id: Uuid,
    /// Units requested.
    #[validate(range(min = 1))]
    pub quantity: u32,
    /// First night (inclusive).
    pub check_in: NaiveDate,
    /// Departure date (exclusive).
    pub check_out: NaiveDate,
}

impl From<RoomRequestDto> for RoomRequest {
    fn from(dto: RoomRequestDto) -> Self {
        Self {
            room_id: dto.room_id,
            quantity: dto.quantity,
            check_in: dto.check_in,
            check_out: dto.check_out,
        }
    }
}

/// Body for the multi-room availability check.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckAvailabilityRequest {
    /// The rooms, quantities, and date ranges to check.
    #[validate(length(min = 1), nested)]
    pub requests: Vec<RoomRequestDto>,
}

/// Availability check result.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityResponse {
    /// Whether every request can be satisfied.
    pub available: bool,
}

/// One room selection of a quote request.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RoomSelectionDto {
    /// The selected room.
    pub room_id: Uuid,
    /// Units requested.
    #[validate(range(min = 1))]
    pub quantity: u32,
}

impl From<RoomSelectionDto> for RoomSelection {
    fn from(dto: RoomSelectionDto) -> Self {
        Self {
            room_id: dto.room_id,
            quantity: dto.quantity,
        }
    }
}

/// Body for the quote endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuoteRequest {
    /// First night (inclusive).
    pub check_in: NaiveDate,
    /// Departure date (exclusive).
    pub check_out: NaiveDate,
    /// Selected rooms and quantities.
    #[validate(length(min = 1), nested)]
    pub rooms: Vec<RoomSelectionDto>,
    /// Booking-wide adult total.
    pub adults: u32,
    /// Booking-wide child total.
    pub children: u32,
}

/// Body for booking creation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookingRequest {
    /// The property the stay is at.
    pub property_id: Uuid,
    /// The guest who is booking.
    pub guest_id: Uuid,
    /// First night (inclusive).
    pub check_in: NaiveDate,
    /// Departure date (exclusive).
    pub check_out: NaiveDate,
    /// Booking-wide adult total.
    pub adults: u32,
    /// Booking-wide child total.
    pub children: u32,
    /// Quoted total in integer currency units.
    #[validate(range(min = 0))]
    pub total_price: i64,
    /// The rooms, quantities, and date ranges to reserve.
    #[validate(length(min = 1), nested)]
    pub requests: Vec<RoomRequestDto>,
    /// Opaque reference from the external payment processor.
    pub payment_reference: Option<String>,
}

/// Body for booking confirmation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ConfirmBookingRequest {
    /// Opaque reference from the external payment processor.
    #[validate(length(min = 1))]
    pub payment_reference: String,
}

/// A booking header together with its room lines.
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    /// The booking header.
    pub booking: Booking,
    /// The room lines reserved under it.
    pub lines: Vec<BookingRoomLine>,
}

/// Service health payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}
