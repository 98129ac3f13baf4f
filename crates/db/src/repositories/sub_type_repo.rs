//! Repository for the `sub_types` table.

use epictrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::reference::{CreateSubType, SubType};

const COLUMNS: &str =
    "id, type_id, name, short_name, sort_order, is_active, is_deleted, created_at, updated_at";

pub struct SubTypeRepo;

impl SubTypeRepo {
    pub async fn create(pool: &PgPool, input: &CreateSubType) -> Result<SubType, sqlx::Error> {
        let query = format!(
            "INSERT INTO sub_types (type_id, name, short_name, sort_order)
             VALUES ($1, $2, $3, COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SubType>(&query)
            .bind(input.type_id)
            .bind(&input.name)
            .bind(&input.short_name)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a sub-type by ID, soft-deleted rows included.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SubType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sub_types WHERE id = $1");
        sqlx::query_as::<_, SubType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Active sub-types of one type, in display order.
    pub async fn list_by_type(pool: &PgPool, type_id: DbId) -> Result<Vec<SubType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sub_types
             WHERE type_id = $1 AND is_deleted = FALSE AND is_active = TRUE
             ORDER BY sort_order, name"
        );
        sqlx::query_as::<_, SubType>(&query)
            .bind(type_id)
            .fetch_all(pool)
            .await
    }
}
