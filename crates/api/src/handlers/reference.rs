//! Handlers for the lookup resources a project form needs: states, types,
//! sub-types, proponents and regions.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use epictrack_core::error::CoreError;
use epictrack_core::types::{DbId, LookupId};
use epictrack_db::models::reference::{
    CreateProponent, ProjectType, Proponent, Region, RegionKind, SubType,
};
use epictrack_db::repositories::{
    ProjectStateRepo, ProjectTypeRepo, ProponentRepo, RegionRepo, SubTypeRepo,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// One entry of the project state list.
#[derive(Debug, Serialize)]
pub struct ProjectStateView {
    pub id: LookupId,
    pub code: String,
    pub label: String,
}

/// GET /api/v1/project-states
pub async fn list_project_states(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProjectStateView>>> {
    let rows = ProjectStateRepo::list(&state.pool).await?;
    let states = rows
        .into_iter()
        .map(|row| ProjectStateView {
            id: row.id,
            code: row.code,
            label: row.name,
        })
        .collect();
    Ok(Json(states))
}

/// GET /api/v1/types
pub async fn list_types(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectType>>> {
    let types = ProjectTypeRepo::list(&state.pool).await?;
    Ok(Json(types))
}

/// GET /api/v1/types/{id}/sub-types
pub async fn list_sub_types(
    State(state): State<AppState>,
    Path(type_id): Path<DbId>,
) -> AppResult<Json<Vec<SubType>>> {
    ProjectTypeRepo::find_by_id(&state.pool, type_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Type",
            id: type_id,
        }))?;
    let sub_types = SubTypeRepo::list_by_type(&state.pool, type_id).await?;
    Ok(Json(sub_types))
}

/// GET /api/v1/proponents
pub async fn list_proponents(State(state): State<AppState>) -> AppResult<Json<Vec<Proponent>>> {
    let proponents = ProponentRepo::list(&state.pool).await?;
    Ok(Json(proponents))
}

/// POST /api/v1/proponents
pub async fn create_proponent(
    State(state): State<AppState>,
    Json(mut input): Json<CreateProponent>,
) -> AppResult<(StatusCode, Json<Proponent>)> {
    input.name = input.name.trim().to_string();
    if input.name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Proponent name must not be empty".to_string(),
        )));
    }
    let proponent = ProponentRepo::create(&state.pool, &input).await?;
    tracing::info!(proponent_id = proponent.id, "Proponent created");
    Ok((StatusCode::CREATED, Json(proponent)))
}

#[derive(Debug, Deserialize)]
pub struct RegionParams {
    pub entity_type: Option<RegionKind>,
}

/// GET /api/v1/regions?entity_type=ENV|FLNR
pub async fn list_regions(
    State(state): State<AppState>,
    Query(params): Query<RegionParams>,
) -> AppResult<Json<Vec<Region>>> {
    let regions = RegionRepo::list(&state.pool, params.entity_type).await?;
    Ok(Json(regions))
}
