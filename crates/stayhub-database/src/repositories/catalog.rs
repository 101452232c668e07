//! Property and room repository implementation.

use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::{FilterField, FilterOp, FilterValue};
use stayhub_entity::property::Property;
use stayhub_entity::room::Room;

use crate::query::push_filters;
use crate::store::CatalogStore;

/// Repository for property and room reads.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    /// Create a new catalog repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for CatalogRepository {
    async fn find_property(&self, id: Uuid) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find property", e))
    }

    async fn rooms_for_property(&self, property_id: Uuid) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE property_id = $1 ORDER BY name")
            .bind(property_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list property rooms", e)
            })
    }

    async fn find_rooms(&self, ids: &[Uuid]) -> AppResult<Vec<Room>> {
        let mut qb = QueryBuilder::new("SELECT * FROM rooms");
        push_filters(
            &mut qb,
            &[FilterField::new(
                "id",
                FilterOp::In,
                FilterValue::UuidList(ids.to_vec()),
            )],
        );

        qb.build_query_as::<Room>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find rooms", e))
    }
}
