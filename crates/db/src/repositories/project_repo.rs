//! Repository for the `projects` table.

use epictrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{
    CreateProject, Project, ProjectDetail, ProjectFilter, ProjectVersion, UpdateProject,
};
use crate::repositories::{
    ProjectStateRepo, ProjectTypeRepo, ProponentRepo, RegionRepo, SubTypeRepo,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, project_tracking_number, description, latitude, longitude, \
    capital_investment, epic_guid, is_project_closed, address, \
    fte_positions_construction, fte_positions_operation, ea_certificate, \
    sub_type_id, type_id, proponent_id, region_id_env, region_id_flnro, \
    abbreviation, eac_signed, eac_expires, project_state_id, \
    is_active, is_deleted, created_by, updated_by, created_at, updated_at";

/// Provides CRUD operations and lookups for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `is_project_closed` defaults to `false` and `is_active` to `true`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (
                name, project_tracking_number, description, latitude, longitude,
                capital_investment, epic_guid, is_project_closed, address,
                fte_positions_construction, fte_positions_operation, ea_certificate,
                sub_type_id, type_id, proponent_id, region_id_env, region_id_flnro,
                abbreviation, eac_signed, eac_expires, project_state_id,
                is_active, created_by, updated_by
             )
             VALUES (
                $1, $2, $3, $4, $5,
                $6, $7, COALESCE($8, FALSE), $9,
                $10, $11, $12,
                $13, $14, $15, $16, $17,
                $18, $19, $20, $21,
                COALESCE($22, TRUE), $23, $23
             )
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.project_tracking_number)
            .bind(&input.description)
            .bind(&input.latitude)
            .bind(&input.longitude)
            .bind(input.capital_investment)
            .bind(&input.epic_guid)
            .bind(input.is_project_closed)
            .bind(&input.address)
            .bind(input.fte_positions_construction)
            .bind(input.fte_positions_operation)
            .bind(&input.ea_certificate)
            .bind(input.sub_type_id)
            .bind(input.type_id)
            .bind(input.proponent_id)
            .bind(input.region_id_env)
            .bind(input.region_id_flnro)
            .bind(&input.abbreviation)
            .bind(input.eac_signed)
            .bind(input.eac_expires)
            .bind(input.project_state_id)
            .bind(input.is_active)
            .bind(&input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND is_deleted = FALSE");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by ID, including soft-deleted rows. Used by restore.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects matching `filter`, ordered by name. Soft-deleted rows
    /// are always excluded.
    pub async fn find_all_projects(
        pool: &PgPool,
        filter: &ProjectFilter,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let mut conditions = vec!["is_deleted = FALSE"];

        if filter.with_works {
            conditions.push("EXISTS (SELECT 1 FROM works w WHERE w.project_id = projects.id)");
        }
        // The only bound parameter.
        if filter.is_active.is_some() {
            conditions.push("is_active = $1");
        }

        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE {} ORDER BY name, id",
            conditions.join(" AND ")
        );

        let mut q = sqlx::query_as::<_, Project>(&query);
        if let Some(active) = filter.is_active {
            q = q.bind(active);
        }
        q.fetch_all(pool).await
    }

    /// Whether a live project already uses `name`, compared case-insensitively.
    ///
    /// `exclude_id` skips one project so an update can keep its own name.
    pub async fn check_existence(
        pool: &PgPool,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM projects
                WHERE LOWER(name) = LOWER($1)
                  AND is_deleted = FALSE
                  AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// First project carrying exactly `abbreviation`. Soft-deleted rows are
    /// included because they still hold the unique value.
    pub async fn find_by_abbreviation(
        pool: &PgPool,
        abbreviation: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects WHERE abbreviation = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Project>(&query)
            .bind(abbreviation)
            .fetch_optional(pool)
            .await
    }

    /// Whether any project other than `exclude_id` holds `abbreviation`.
    pub async fn abbreviation_exists(
        pool: &PgPool,
        abbreviation: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM projects
                WHERE abbreviation = $1
                  AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(abbreviation)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied,
    /// except `updated_by`, which always records the actor of this write.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                project_tracking_number = COALESCE($3, project_tracking_number),
                description = COALESCE($4, description),
                latitude = COALESCE($5, latitude),
                longitude = COALESCE($6, longitude),
                capital_investment = COALESCE($7, capital_investment),
                epic_guid = COALESCE($8, epic_guid),
                is_project_closed = COALESCE($9, is_project_closed),
                address = COALESCE($10, address),
                fte_positions_construction = COALESCE($11, fte_positions_construction),
                fte_positions_operation = COALESCE($12, fte_positions_operation),
                ea_certificate = COALESCE($13, ea_certificate),
                sub_type_id = COALESCE($14, sub_type_id),
                type_id = COALESCE($15, type_id),
                proponent_id = COALESCE($16, proponent_id),
                region_id_env = COALESCE($17, region_id_env),
                region_id_flnro = COALESCE($18, region_id_flnro),
                abbreviation = COALESCE($19, abbreviation),
                eac_signed = COALESCE($20, eac_signed),
                eac_expires = COALESCE($21, eac_expires),
                project_state_id = COALESCE($22, project_state_id),
                is_active = COALESCE($23, is_active),
                updated_by = $24
             WHERE id = $1 AND is_deleted = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.project_tracking_number)
            .bind(&input.description)
            .bind(&input.latitude)
            .bind(&input.longitude)
            .bind(input.capital_investment)
            .bind(&input.epic_guid)
            .bind(input.is_project_closed)
            .bind(&input.address)
            .bind(input.fte_positions_construction)
            .bind(input.fte_positions_operation)
            .bind(&input.ea_certificate)
            .bind(input.sub_type_id)
            .bind(input.type_id)
            .bind(input.proponent_id)
            .bind(input.region_id_env)
            .bind(input.region_id_flnro)
            .bind(&input.abbreviation)
            .bind(input.eac_signed)
            .bind(input.eac_expires)
            .bind(input.project_state_id)
            .bind(input.is_active)
            .bind(&input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a project by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(
        pool: &PgPool,
        id: DbId,
        actor: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET is_deleted = TRUE, updated_by = $2
             WHERE id = $1 AND is_deleted = FALSE",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a soft-deleted project. Returns `true` if a row was restored.
    pub async fn restore(
        pool: &PgPool,
        id: DbId,
        actor: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET is_deleted = FALSE, updated_by = $2
             WHERE id = $1 AND is_deleted = TRUE",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Load a live project together with every entity it references.
    ///
    /// Returns `None` if the project does not exist or is soft-deleted.
    /// References resolve even when they have since been soft-deleted.
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectDetail>, sqlx::Error> {
        let Some(project) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let project_type =
            ProjectTypeRepo::find_by_id_include_deleted(pool, project.type_id).await?;
        let sub_type = SubTypeRepo::find_by_id_include_deleted(pool, project.sub_type_id).await?;
        let proponent =
            ProponentRepo::find_by_id_include_deleted(pool, project.proponent_id).await?;
        let region_env = match project.region_id_env {
            Some(region_id) => RegionRepo::find_by_id_include_deleted(pool, region_id).await?,
            None => None,
        };
        let region_flnro = match project.region_id_flnro {
            Some(region_id) => RegionRepo::find_by_id_include_deleted(pool, region_id).await?,
            None => None,
        };
        let project_state = match project.project_state_id {
            Some(state_id) => ProjectStateRepo::find_by_id(pool, state_id).await?,
            None => None,
        };

        Ok(Some(ProjectDetail {
            project,
            project_type,
            sub_type,
            proponent,
            region_env,
            region_flnro,
            project_state,
        }))
    }

    /// Version history of a project, oldest first.
    pub async fn list_versions(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectVersion>, sqlx::Error> {
        sqlx::query_as::<_, ProjectVersion>(
            "SELECT id, project_id, version, snapshot, changed_by, created_at
             FROM projects_history
             WHERE project_id = $1
             ORDER BY version",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }
}
