//! Room inventory repository implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::{FilterField, Ordering, StayRange};
use stayhub_entity::inventory::InventoryRow;

use crate::query::{push_filters, push_ordering};
use crate::store::InventoryStore;

/// Repository for per-(room, date) inventory rows.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: PgPool,
}

impl InventoryRepository {
    /// Create a new inventory repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryStore for InventoryRepository {
    async fn get_room_inventory(
        &self,
        room_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<InventoryRow>> {
        let mut qb = QueryBuilder::new("SELECT * FROM room_inventory");
        push_filters(
            &mut qb,
            &[
                FilterField::eq_uuid("room_id", room_id),
                FilterField::date_gte("date", start),
                FilterField::date_lte("date", end),
            ],
        );
        push_ordering(&mut qb, &Ordering::asc("date"));

        qb.build_query_as::<InventoryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to read room inventory", e)
            })
    }

    async fn stay_inventory(&self, room_id: Uuid, stay: &StayRange) -> AppResult<Vec<InventoryRow>> {
        let mut qb = QueryBuilder::new("SELECT * FROM room_inventory");
        push_filters(
            &mut qb,
            &[
                FilterField::eq_uuid("room_id", room_id),
                FilterField::date_gte("date", stay.check_in()),
                FilterField::date_lt("date", stay.check_out()),
            ],
        );
        push_ordering(&mut qb, &Ordering::asc("date"));

        qb.build_query_as::<InventoryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to read stay inventory", e)
            })
    }

    async fn check_room_availability(&self, room_id: Uuid, stay: &StayRange) -> AppResult<bool> {
        // Dates with no row pass vacuously; only an explicit zero blocks.
        sqlx::query_scalar::<_, bool>(
            "SELECT NOT EXISTS ( \
                SELECT 1 FROM room_inventory \
                WHERE room_id = $1 AND date >= $2 AND date < $3 AND available <= 0 \
             )",
        )
        .bind(room_id)
        .bind(stay.check_in())
        .bind(stay.check_out())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check room availability", e)
        })
    }

    async fn set_room_inventory(
        &self,
        room_id: Uuid,
        date: NaiveDate,
        available: i32,
    ) -> AppResult<InventoryRow> {
        sqlx::query_as::<_, InventoryRow>(
            "INSERT INTO room_inventory (room_id, date, available) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (room_id, date) DO UPDATE SET \
                available = EXCLUDED.available, \
                updated_at = NOW() \
             RETURNING *",
        )
        .bind(room_id)
        .bind(date)
        .bind(available)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert inventory", e))
    }

    async fn try_decrement(
        &self,
        room_id: Uuid,
        date: NaiveDate,
        quantity: u32,
    ) -> AppResult<bool> {
        // The availability predicate is part of the UPDATE itself, so two
        // concurrent bookings cannot both observe the same pre-decrement
        // value and oversell the date.
        let result = sqlx::query(
            "UPDATE room_inventory SET \
                available = available - $3, \
                updated_at = NOW() \
             WHERE room_id = $1 AND date = $2 AND available >= $3",
        )
        .bind(room_id)
        .bind(date)
        .bind(quantity as i32)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to decrement inventory", e)
        })?;

        Ok(result.rows_affected() == 1)
    }
}
