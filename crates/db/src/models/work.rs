//! Work entity model and DTOs.

use epictrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `works` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Work {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new work.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWork {
    pub project_id: DbId,
    pub title: String,
}
