//! Repository for the `regions` table.

use epictrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::reference::{CreateRegion, Region, RegionKind};

const COLUMNS: &str =
    "id, name, entity_type, sort_order, is_active, is_deleted, created_at, updated_at";

pub struct RegionRepo;

impl RegionRepo {
    pub async fn create(pool: &PgPool, input: &CreateRegion) -> Result<Region, sqlx::Error> {
        let query = format!(
            "INSERT INTO regions (name, entity_type, sort_order)
             VALUES ($1, $2, COALESCE($3, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Region>(&query)
            .bind(&input.name)
            .bind(input.entity_type.as_str())
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a region by ID, soft-deleted rows included.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Region>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM regions WHERE id = $1");
        sqlx::query_as::<_, Region>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Live regions, optionally narrowed to one kind.
    pub async fn list(pool: &PgPool, kind: Option<RegionKind>) -> Result<Vec<Region>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM regions
             WHERE is_deleted = FALSE AND ($1::TEXT IS NULL OR entity_type = $1)
             ORDER BY entity_type, sort_order, name"
        );
        sqlx::query_as::<_, Region>(&query)
            .bind(kind.map(RegionKind::as_str))
            .fetch_all(pool)
            .await
    }
}
