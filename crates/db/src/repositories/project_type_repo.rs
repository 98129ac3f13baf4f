//! Repository for the `types` table.

use epictrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::reference::{CreateProjectType, ProjectType};

const COLUMNS: &str = "id, name, sort_order, is_active, is_deleted, created_at, updated_at";

pub struct ProjectTypeRepo;

impl ProjectTypeRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectType,
    ) -> Result<ProjectType, sqlx::Error> {
        let query = format!(
            "INSERT INTO types (name, sort_order)
             VALUES ($1, COALESCE($2, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectType>(&query)
            .bind(&input.name)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a type by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM types WHERE id = $1 AND is_deleted = FALSE");
        sqlx::query_as::<_, ProjectType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a type by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM types WHERE id = $1");
        sqlx::query_as::<_, ProjectType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Active types in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM types
             WHERE is_deleted = FALSE AND is_active = TRUE
             ORDER BY sort_order, name"
        );
        sqlx::query_as::<_, ProjectType>(&query).fetch_all(pool).await
    }
}
