//! Booking lifecycle handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use stayhub_core::AppError;
use stayhub_entity::booking::{Booking, CreateBooking, RoomRequest};
use stayhub_service::BookingOutcome;

use crate::dto::{BookingResponse, ConfirmBookingRequest, CreateBookingRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/bookings — convert a validated request into a reservation.
///
/// Responds 409 when the availability re-check fails (nothing written).
/// A created booking responds 201; the body distinguishes a fully
/// committed booking from one whose bookkeeping is incomplete.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingOutcome>), ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let new = CreateBooking {
        property_id: payload.property_id,
        guest_id: payload.guest_id,
        check_in: payload.check_in,
        check_out: payload.check_out,
        adults: payload.adults as i32,
        children: payload.children as i32,
        total_price: payload.total_price,
    };
    let requests: Vec<RoomRequest> = payload.requests.into_iter().map(Into::into).collect();

    let outcome = state
        .bookings
        .create_multi_room_booking(&new, &requests, payload.payment_reference.as_deref())
        .await?;

    match outcome {
        BookingOutcome::Unavailable => Err(AppError::insufficient_inventory(
            "requested rooms are not available for the requested dates",
        )
        .into()),
        outcome => Ok((StatusCode::CREATED, Json(outcome))),
    }
}

/// GET /api/bookings/{id} — header with room lines.
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingResponse>, ApiError> {
    let booking = state
        .bookings
        .find_booking(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;
    let lines = state.bookings.lines_for_booking(id).await?;
    Ok(Json(BookingResponse { booking, lines }))
}

/// GET /api/guests/{id}/bookings — a guest's bookings, newest first.
pub async fn guest_bookings(
    State(state): State<AppState>,
    Path(guest_id): Path<Uuid>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let bookings = state.bookings.bookings_for_guest(guest_id).await?;
    Ok(Json(bookings))
}

/// POST /api/bookings/{id}/confirm — attach a payment reference.
pub async fn confirm_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ConfirmBookingRequest>,
) -> Result<Json<Booking>, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let booking = state
        .bookings
        .confirm_booking(id, &payload.payment_reference)
        .await?;
    Ok(Json(booking))
}

/// POST /api/bookings/{id}/cancel — flip status; inventory stays as-is.
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, ApiError> {
    let booking = state.bookings.cancel_booking(id).await?;
    Ok(Json(booking))
}
