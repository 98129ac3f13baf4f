//! Lookup entities a project points at: types, sub-types, proponents,
//! regions and the seeded project states.

use std::fmt;

use epictrack_core::project_state::ProjectState;
use epictrack_core::types::{DbId, LookupId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `types` table (e.g. "Mines", "Energy - Electricity").
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectType {
    pub id: DbId,
    pub name: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectType {
    pub name: String,
    pub sort_order: Option<i32>,
}

/// A row from the `sub_types` table. Every sub-type belongs to one type.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubType {
    pub id: DbId,
    pub type_id: DbId,
    pub name: String,
    pub short_name: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubType {
    pub type_id: DbId,
    pub name: String,
    pub short_name: String,
    pub sort_order: Option<i32>,
}

/// A row from the `proponents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Proponent {
    pub id: DbId,
    pub name: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProponent {
    pub name: String,
}

/// Which regional scheme a region belongs to.
///
/// Projects carry one region of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionKind {
    /// Environmental regions.
    #[serde(rename = "ENV")]
    Env,
    /// Land and natural-resource management regions.
    #[serde(rename = "FLNR")]
    Flnr,
}

impl RegionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RegionKind::Env => "ENV",
            RegionKind::Flnr => "FLNR",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row from the `regions` table. `entity_type` is `ENV` or `FLNR`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Region {
    pub id: DbId,
    pub name: String,
    pub entity_type: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Region {
    pub fn kind(&self) -> Option<RegionKind> {
        match self.entity_type.as_str() {
            "ENV" => Some(RegionKind::Env),
            "FLNR" => Some(RegionKind::Flnr),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRegion {
    pub name: String,
    pub entity_type: RegionKind,
    pub sort_order: Option<i32>,
}

/// A seeded row from the `project_states` lookup table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectStateRow {
    pub id: LookupId,
    pub code: String,
    pub name: String,
    pub sort_order: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProjectStateRow {
    /// The typed state for this row, if the code is one the application knows.
    pub fn state(&self) -> Option<ProjectState> {
        ProjectState::from_id(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_kind_serializes_as_short_code() {
        assert_eq!(serde_json::to_string(&RegionKind::Env).unwrap(), "\"ENV\"");
        let kind: RegionKind = serde_json::from_str("\"FLNR\"").unwrap();
        assert_eq!(kind, RegionKind::Flnr);
        assert_eq!(kind.as_str(), "FLNR");
    }
}
