//! Booking and room line repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::booking::{Booking, BookingRoomLine, BookingStatus, CreateBooking, RoomRequest};

use crate::store::BookingStore;

/// Repository for booking headers and room lines.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for BookingRepository {
    async fn create_booking(
        &self,
        new: &CreateBooking,
        status: BookingStatus,
        payment_reference: Option<&str>,
    ) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings \
                (property_id, guest_id, check_in, check_out, adults, children, \
                 total_price, status, payment_reference) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(new.property_id)
        .bind(new.guest_id)
        .bind(new.check_in)
        .bind(new.check_out)
        .bind(new.adults)
        .bind(new.children)
        .bind(new.total_price)
        .bind(status)
        .bind(payment_reference)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create booking", e))
    }

    async fn add_room_line(
        &self,
        booking_id: Uuid,
        request: &RoomRequest,
    ) -> AppResult<BookingRoomLine> {
        sqlx::query_as::<_, BookingRoomLine>(
            "INSERT INTO booking_room_lines \
                (booking_id, room_id, quantity, check_in, check_out) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(booking_id)
        .bind(request.room_id)
        .bind(request.quantity as i32)
        .bind(request.check_in)
        .bind(request.check_out)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add room line", e))
    }

    async fn find_booking(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find booking", e))
    }

    async fn lines_for_booking(&self, booking_id: Uuid) -> AppResult<Vec<BookingRoomLine>> {
        sqlx::query_as::<_, BookingRoomLine>(
            "SELECT * FROM booking_room_lines WHERE booking_id = $1 ORDER BY created_at",
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list room lines", e))
    }

    async fn find_by_guest(&self, guest_id: Uuid) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE guest_id = $1 ORDER BY created_at DESC",
        )
        .bind(guest_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list guest bookings", e))
    }

    async fn update_status(&self, id: Uuid, status: BookingStatus) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update booking status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))
    }

    async fn attach_payment_reference(&self, id: Uuid, reference: &str) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET payment_reference = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(reference)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to attach payment reference", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))
    }
}
