//! Repository for the seeded `project_states` lookup table.

use epictrack_core::types::LookupId;
use sqlx::PgPool;

use crate::models::reference::ProjectStateRow;

const COLUMNS: &str = "id, code, name, sort_order, created_at, updated_at";

pub struct ProjectStateRepo;

impl ProjectStateRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectStateRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_states ORDER BY sort_order, id");
        sqlx::query_as::<_, ProjectStateRow>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: LookupId,
    ) -> Result<Option<ProjectStateRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_states WHERE id = $1");
        sqlx::query_as::<_, ProjectStateRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
