//! Repository for the `proponents` table.

use epictrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::reference::{CreateProponent, Proponent};

const COLUMNS: &str = "id, name, is_active, is_deleted, created_at, updated_at";

pub struct ProponentRepo;

impl ProponentRepo {
    pub async fn create(pool: &PgPool, input: &CreateProponent) -> Result<Proponent, sqlx::Error> {
        let query = format!("INSERT INTO proponents (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Proponent>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a proponent by ID, including soft-deleted rows. Projects keep
    /// pointing at a proponent after it is retired.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Proponent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proponents WHERE id = $1");
        sqlx::query_as::<_, Proponent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All live proponents ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Proponent>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM proponents WHERE is_deleted = FALSE ORDER BY name");
        sqlx::query_as::<_, Proponent>(&query).fetch_all(pool).await
    }
}
