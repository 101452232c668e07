//! Quote handler.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use stayhub_core::AppError;
use stayhub_core::types::{GuestCount, StayRange};
use stayhub_entity::booking::RoomSelection;
use stayhub_service::BookingQuote;

use crate::dto::QuoteRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/properties/{id}/quotes — price a prospective stay.
pub async fn quote(
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
    Json(payload): Json<QuoteRequest>,
) -> Result<Json<BookingQuote>, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let stay = StayRange::new(payload.check_in, payload.check_out)?;
    let selections: Vec<RoomSelection> = payload.rooms.into_iter().map(Into::into).collect();
    let guests = GuestCount::new(payload.adults, payload.children);

    let quote = state
        .quotes
        .quote(property_id, &stay, &selections, guests)
        .await?;
    Ok(Json(quote))
}
