//! Booking orchestration: availability gate, header persistence, room
//! lines, and per-date inventory decrement.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use stayhub_core::AppResult;
use stayhub_database::store::{BookingStore, InventoryStore};
use stayhub_entity::booking::{Booking, BookingRoomLine, BookingStatus, CreateBooking, RoomRequest};

use crate::availability::AvailabilityService;

/// A persistence step that failed after the booking header was committed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PersistenceIssue {
    /// A room line insert failed.
    LineInsert {
        /// The affected room.
        room_id: Uuid,
        /// Store error detail.
        detail: String,
    },
    /// An inventory decrement did not apply.
    InventoryDecrement {
        /// The affected room.
        room_id: Uuid,
        /// The affected date.
        date: NaiveDate,
        /// Why the decrement did not land.
        detail: String,
    },
}

/// Result of a checkout attempt.
///
/// `Unavailable` means nothing was written. `Committed` means header,
/// lines, and decrements all landed. `Incomplete` means the header row
/// exists but some follow-up writes failed — there is no rollback, and
/// the issues list is the manual reconciliation worklist. Callers must
/// not treat `Incomplete` as full success: money may already have moved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BookingOutcome {
    /// The availability re-check failed; no writes were performed.
    Unavailable,
    /// Every write landed.
    Committed(Booking),
    /// The header exists but bookkeeping is incomplete.
    Incomplete {
        /// The committed booking header.
        booking: Booking,
        /// The writes that failed.
        issues: Vec<PersistenceIssue>,
    },
}

/// Orchestrates checkout and booking lifecycle transitions.
#[derive(Clone)]
pub struct BookingService {
    bookings: Arc<dyn BookingStore>,
    inventory: Arc<dyn InventoryStore>,
    availability: AvailabilityService,
}

impl BookingService {
    /// Create a new booking service.
    pub fn new(bookings: Arc<dyn BookingStore>, inventory: Arc<dyn InventoryStore>) -> Self {
        let availability = AvailabilityService::new(Arc::clone(&inventory));
        Self {
            bookings,
            inventory,
            availability,
        }
    }

    /// Convert a validated request into a persisted reservation.
    ///
    /// Steps run strictly in sequence: re-check availability, insert the
    /// header, insert one room line per request, then decrement
    /// `available` for every date of every request. A `payment_reference`
    /// is stored verbatim and marks the booking confirmed; without one
    /// the booking is created pending.
    pub async fn create_multi_room_booking(
        &self,
        new: &CreateBooking,
        requests: &[RoomRequest],
        payment_reference: Option<&str>,
    ) -> AppResult<BookingOutcome> {
        if !self
            .availability
            .check_multi_room_availability(requests)
            .await?
        {
            info!(
                property_id = %new.property_id,
                "Booking rejected: insufficient inventory"
            );
            return Ok(BookingOutcome::Unavailable);
        }

        let status = if payment_reference.is_some() {
            BookingStatus::Confirmed
        } else {
            BookingStatus::Pending
        };
        let booking = self
            .bookings
            .create_booking(new, status, payment_reference)
            .await?;

        let mut issues = Vec::new();

        for request in requests {
            if let Err(e) = self.bookings.add_room_line(booking.id, request).await {
                warn!(
                    booking_id = %booking.id,
                    room_id = %request.room_id,
                    error = %e,
                    "Room line insert failed"
                );
                issues.push(PersistenceIssue::LineInsert {
                    room_id: request.room_id,
                    detail: e.to_string(),
                });
            }
        }

        for request in requests {
            let stay = request.stay()?;
            for date in stay.dates() {
                match self
                    .inventory
                    .try_decrement(request.room_id, date, request.quantity)
                    .await
                {
                    Ok(true) => {}
                    Ok(false) => {
                        warn!(
                            booking_id = %booking.id,
                            room_id = %request.room_id,
                            date = %date,
                            "Inventory decrement did not match"
                        );
                        issues.push(PersistenceIssue::InventoryDecrement {
                            room_id: request.room_id,
                            date,
                            detail: "insufficient units at write time".to_string(),
                        });
                    }
                    Err(e) => {
                        warn!(
                            booking_id = %booking.id,
                            room_id = %request.room_id,
                            date = %date,
                            error = %e,
                            "Inventory decrement failed"
                        );
                        issues.push(PersistenceIssue::InventoryDecrement {
                            room_id: request.room_id,
                            date,
                            detail: e.to_string(),
                        });
                    }
                }
            }
        }

        if issues.is_empty() {
            info!(booking_id = %booking.id, "Booking committed");
            Ok(BookingOutcome::Committed(booking))
        } else {
            warn!(
                booking_id = %booking.id,
                issue_count = issues.len(),
                "Booking committed with incomplete bookkeeping"
            );
            Ok(BookingOutcome::Incomplete { booking, issues })
        }
    }

    /// Find a booking header.
    pub async fn find_booking(&self, id: Uuid) -> AppResult<Option<Booking>> {
        self.bookings.find_booking(id).await
    }

    /// Room lines of a booking.
    pub async fn lines_for_booking(&self, booking_id: Uuid) -> AppResult<Vec<BookingRoomLine>> {
        self.bookings.lines_for_booking(booking_id).await
    }

    /// Bookings of a guest, newest first.
    pub async fn bookings_for_guest(&self, guest_id: Uuid) -> AppResult<Vec<Booking>> {
        self.bookings.find_by_guest(guest_id).await
    }

    /// Attach a payment reference and mark the booking confirmed.
    pub async fn confirm_booking(&self, id: Uuid, payment_reference: &str) -> AppResult<Booking> {
        self.bookings
            .attach_payment_reference(id, payment_reference)
            .await?;
        let booking = self
            .bookings
            .update_status(id, BookingStatus::Confirmed)
            .await?;
        info!(booking_id = %id, "Booking confirmed");
        Ok(booking)
    }

    /// Mark a booking cancelled. Inventory is not restocked.
    pub async fn cancel_booking(&self, id: Uuid) -> AppResult<Booking> {
        let booking = self
            .bookings
            .update_status(id, BookingStatus::Cancelled)
            .await?;
        info!(booking_id = %id, "Booking cancelled");
        Ok(booking)
    }
}
