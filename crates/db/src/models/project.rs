//! Project entity model and DTOs.

use epictrack_core::project::ProjectFields;
use epictrack_core::project_state::ProjectState;
use epictrack_core::types::{Date, DbId, LookupId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::reference::{ProjectStateRow, ProjectType, Proponent, Region, SubType};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub project_tracking_number: Option<String>,
    pub description: Option<String>,
    pub latitude: String,
    pub longitude: String,
    pub capital_investment: Option<f64>,
    pub epic_guid: Option<String>,
    pub is_project_closed: bool,
    pub address: Option<String>,
    pub fte_positions_construction: Option<i32>,
    pub fte_positions_operation: Option<i32>,
    pub ea_certificate: Option<String>,
    pub sub_type_id: DbId,
    pub type_id: DbId,
    pub proponent_id: DbId,
    pub region_id_env: Option<DbId>,
    pub region_id_flnro: Option<DbId>,
    pub abbreviation: Option<String>,
    pub eac_signed: Option<Date>,
    pub eac_expires: Option<Date>,
    pub project_state_id: Option<LookupId>,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// The typed lifecycle state, if one is set.
    pub fn state(&self) -> Option<ProjectState> {
        self.project_state_id.and_then(ProjectState::from_id)
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub project_tracking_number: Option<String>,
    pub description: Option<String>,
    pub latitude: String,
    pub longitude: String,
    pub capital_investment: Option<f64>,
    pub epic_guid: Option<String>,
    /// Defaults to `false` if omitted.
    pub is_project_closed: Option<bool>,
    pub address: Option<String>,
    pub fte_positions_construction: Option<i32>,
    pub fte_positions_operation: Option<i32>,
    pub ea_certificate: Option<String>,
    pub sub_type_id: DbId,
    pub type_id: DbId,
    pub proponent_id: DbId,
    pub region_id_env: Option<DbId>,
    pub region_id_flnro: Option<DbId>,
    pub abbreviation: Option<String>,
    pub eac_signed: Option<Date>,
    pub eac_expires: Option<Date>,
    pub project_state_id: Option<LookupId>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
    pub created_by: Option<String>,
}

impl CreateProject {
    /// Fields subject to domain validation.
    pub fn fields(&self) -> ProjectFields<'_> {
        ProjectFields {
            name: Some(&self.name),
            latitude: Some(&self.latitude),
            longitude: Some(&self.longitude),
            abbreviation: self.abbreviation.as_deref(),
            ea_certificate: self.ea_certificate.as_deref(),
            capital_investment: self.capital_investment,
            fte_positions_construction: self.fte_positions_construction,
            fte_positions_operation: self.fte_positions_operation,
            eac_signed: self.eac_signed,
            eac_expires: self.eac_expires,
            project_state_id: self.project_state_id,
        }
    }
}

/// DTO for updating an existing project. All fields are optional; `None`
/// leaves the stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub project_tracking_number: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub capital_investment: Option<f64>,
    pub epic_guid: Option<String>,
    pub is_project_closed: Option<bool>,
    pub address: Option<String>,
    pub fte_positions_construction: Option<i32>,
    pub fte_positions_operation: Option<i32>,
    pub ea_certificate: Option<String>,
    pub sub_type_id: Option<DbId>,
    pub type_id: Option<DbId>,
    pub proponent_id: Option<DbId>,
    pub region_id_env: Option<DbId>,
    pub region_id_flnro: Option<DbId>,
    pub abbreviation: Option<String>,
    pub eac_signed: Option<Date>,
    pub eac_expires: Option<Date>,
    pub project_state_id: Option<LookupId>,
    pub is_active: Option<bool>,
    pub updated_by: Option<String>,
}

impl UpdateProject {
    /// Fields subject to domain validation. Date ordering is checked only
    /// between the values present in the patch; the handler re-checks
    /// against the stored row.
    pub fn fields(&self) -> ProjectFields<'_> {
        ProjectFields {
            name: self.name.as_deref(),
            latitude: self.latitude.as_deref(),
            longitude: self.longitude.as_deref(),
            abbreviation: self.abbreviation.as_deref(),
            ea_certificate: self.ea_certificate.as_deref(),
            capital_investment: self.capital_investment,
            fte_positions_construction: self.fte_positions_construction,
            fte_positions_operation: self.fte_positions_operation,
            eac_signed: self.eac_signed,
            eac_expires: self.eac_expires,
            project_state_id: self.project_state_id,
        }
    }
}

/// Filters for [`find_all_projects`](crate::repositories::ProjectRepo::find_all_projects).
///
/// Soft-deleted projects are always excluded.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ProjectFilter {
    /// Only projects with at least one live work.
    #[serde(default)]
    pub with_works: bool,
    /// Restrict to active (`Some(true)`) or inactive (`Some(false)`) projects.
    pub is_active: Option<bool>,
}

/// A project with its referenced entities resolved, the full JSON
/// representation returned by the detail endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    #[serde(rename = "type")]
    pub project_type: Option<ProjectType>,
    pub sub_type: Option<SubType>,
    pub proponent: Option<Proponent>,
    pub region_env: Option<Region>,
    pub region_flnro: Option<Region>,
    pub project_state: Option<ProjectStateRow>,
}

/// A snapshot row from `projects_history`, written on every insert/update.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectVersion {
    pub id: DbId,
    pub project_id: DbId,
    pub version: i32,
    pub snapshot: serde_json::Value,
    pub changed_by: Option<String>,
    pub created_at: Timestamp,
}
