//! Repository for the `works` table.

use epictrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::work::{CreateWork, Work};

const COLUMNS: &str = "id, project_id, title, is_active, is_deleted, created_at, updated_at";

pub struct WorkRepo;

impl WorkRepo {
    pub async fn create(pool: &PgPool, input: &CreateWork) -> Result<Work, sqlx::Error> {
        let query = format!(
            "INSERT INTO works (project_id, title) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .fetch_one(pool)
            .await
    }

    /// Live works for a project, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Work>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM works
             WHERE project_id = $1 AND is_deleted = FALSE
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE works SET is_deleted = TRUE WHERE id = $1 AND is_deleted = FALSE")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
