//! Multi-room availability handler.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use stayhub_core::AppError;
use stayhub_entity::booking::RoomRequest;

use crate::dto::{AvailabilityResponse, CheckAvailabilityRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/availability/check — gate checkout on unit availability.
pub async fn check_multi_room(
    State(state): State<AppState>,
    Json(payload): Json<CheckAvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let requests: Vec<RoomRequest> = payload.requests.into_iter().map(Into::into).collect();
    let available = state
        .availability
        .check_multi_room_availability(&requests)
        .await?;
    Ok(Json(AvailabilityResponse { available }))
}
