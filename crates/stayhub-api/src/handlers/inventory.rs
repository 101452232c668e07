//! Inventory read and write handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use stayhub_core::AppError;
use stayhub_core::types::StayRange;
use stayhub_entity::inventory::InventoryRow;
use stayhub_service::RoomInventory;

use crate::dto::{AvailabilityResponse, DateRangeQuery, SetInventoryRequest, StayQuery};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/rooms/{id}/inventory — rows for an inclusive date range.
pub async fn get_room_inventory(
    State(state): State<AppState>,
    Path(room_id): Path<Uuid>,
    Query(range): Query<DateRangeQuery>,
) -> Result<Json<Vec<InventoryRow>>, ApiError> {
    let rows = state
        .inventory
        .get_room_inventory(room_id, range.start, range.end)
        .await?;
    Ok(Json(rows))
}

/// PUT /api/rooms/{id}/inventory — idempotent upsert for one date.
pub async fn set_room_inventory(
    State(state): State<AppState>,
    Path(room_id): Path<Uuid>,
    Json(payload): Json<SetInventoryRequest>,
) -> Result<Json<InventoryRow>, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let row = state
        .inventory
        .set_room_inventory(room_id, payload.date, payload.available)
        .await?;
    Ok(Json(row))
}

/// GET /api/rooms/{id}/availability — at least one unit free every night.
pub async fn check_room_availability(
    State(state): State<AppState>,
    Path(room_id): Path<Uuid>,
    Query(stay): Query<StayQuery>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let stay = StayRange::new(stay.check_in, stay.check_out)?;
    let available = state.inventory.check_room_availability(room_id, &stay).await?;
    Ok(Json(AvailabilityResponse { available }))
}

/// GET /api/properties/{id}/inventory — concurrent per-room prefetch.
pub async fn property_inventory(
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
    Query(range): Query<DateRangeQuery>,
) -> Result<Json<Vec<RoomInventory>>, ApiError> {
    let inventories = state
        .inventory
        .property_inventory(property_id, range.start, range.end)
        .await?;
    Ok(Json(inventories))
}
