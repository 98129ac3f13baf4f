//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use epictrack_core::error::CoreError;
use epictrack_core::project::{
    abbreviation_candidates, normalize_abbreviation, suggest_abbreviation, validate_eac_dates,
};
use epictrack_core::types::DbId;
use epictrack_db::models::project::{
    CreateProject, Project, ProjectDetail, ProjectFilter, ProjectVersion, UpdateProject,
};
use epictrack_db::models::work::Work;
use epictrack_db::repositories::{ProjectRepo, WorkRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Upper bound on suffixed candidates tried when suggesting an abbreviation.
const MAX_ABBREVIATION_ATTEMPTS: usize = 100;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// Reject a name already used by another live project.
async fn ensure_name_available(
    state: &AppState,
    name: &str,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    if ProjectRepo::check_existence(&state.pool, name.trim(), exclude_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "A project named '{}' already exists",
            name.trim()
        ))));
    }
    Ok(())
}

/// Reject an abbreviation already held by another project.
async fn ensure_abbreviation_available(
    state: &AppState,
    abbreviation: &str,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    if ProjectRepo::abbreviation_exists(&state.pool, abbreviation, exclude_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Abbreviation '{abbreviation}' is already in use"
        ))));
    }
    Ok(())
}

/// GET /api/v1/projects?with_works=&is_active=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::find_all_projects(&state.pool, &filter).await?;
    Ok(Json(projects))
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    input.fields().validate()?;
    input.name = input.name.trim().to_string();
    input.abbreviation = input.abbreviation.as_deref().map(normalize_abbreviation);

    ensure_name_available(&state, &input.name, None).await?;
    if let Some(abbreviation) = &input.abbreviation {
        ensure_abbreviation_available(&state, abbreviation, None).await?;
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, name = %project.name, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetail>> {
    let detail = ProjectRepo::find_detail_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(detail))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    input.fields().validate()?;

    let current = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    validate_eac_dates(
        input.eac_signed.or(current.eac_signed),
        input.eac_expires.or(current.eac_expires),
    )?;

    if let Some(name) = input.name.as_mut() {
        *name = name.trim().to_string();
        ensure_name_available(&state, name, Some(id)).await?;
    }
    input.abbreviation = input.abbreviation.as_deref().map(normalize_abbreviation);
    if let Some(abbreviation) = &input.abbreviation {
        ensure_abbreviation_available(&state, abbreviation, Some(id)).await?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = id, "Project updated");
    Ok(Json(project))
}

/// Who performed a delete or restore, recorded in the version history.
#[derive(Debug, Default, Deserialize)]
pub struct ActorParams {
    pub actor: Option<String>,
}

/// DELETE /api/v1/projects/{id}?actor=
///
/// Soft delete; the row stays in place with `is_deleted` set.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ActorParams>,
) -> AppResult<StatusCode> {
    if ProjectRepo::soft_delete(&state.pool, id, params.actor.as_deref()).await? {
        tracing::info!(project_id = id, "Project soft-deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// POST /api/v1/projects/{id}/restore?actor=
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ActorParams>,
) -> AppResult<StatusCode> {
    let project = ProjectRepo::find_by_id_include_deleted(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    if !project.is_deleted {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Project {id} is not deleted"
        ))));
    }
    // A live project may have taken the name while this one was deleted.
    ensure_name_available(&state, &project.name, Some(id)).await?;

    ProjectRepo::restore(&state.pool, id, params.actor.as_deref()).await?;
    tracing::info!(project_id = id, "Project restored");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/projects/{id}/versions
pub async fn list_versions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectVersion>>> {
    ProjectRepo::find_by_id_include_deleted(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let versions = ProjectRepo::list_versions(&state.pool, id).await?;
    Ok(Json(versions))
}

/// GET /api/v1/projects/{id}/works
pub async fn list_works(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Work>>> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let works = WorkRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(works))
}

#[derive(Debug, Deserialize)]
pub struct ExistsParams {
    pub name: String,
    pub project_id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

/// GET /api/v1/projects/exists?name=&project_id=
pub async fn check_existence(
    State(state): State<AppState>,
    Query(params): Query<ExistsParams>,
) -> AppResult<Json<ExistsResponse>> {
    let exists =
        ProjectRepo::check_existence(&state.pool, params.name.trim(), params.project_id).await?;
    Ok(Json(ExistsResponse { exists }))
}

#[derive(Debug, Deserialize)]
pub struct AbbreviationParams {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct AbbreviationResponse {
    pub abbreviation: String,
}

/// GET /api/v1/projects/abbreviation?name=
///
/// Suggest an abbreviation for `name` that no project currently holds.
pub async fn suggest(
    State(state): State<AppState>,
    Query(params): Query<AbbreviationParams>,
) -> AppResult<Json<AbbreviationResponse>> {
    let base = suggest_abbreviation(&params.name).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Cannot derive an abbreviation from '{}'",
            params.name
        ))
    })?;

    for candidate in abbreviation_candidates(&base).take(MAX_ABBREVIATION_ATTEMPTS) {
        if !ProjectRepo::abbreviation_exists(&state.pool, &candidate, None).await? {
            return Ok(Json(AbbreviationResponse {
                abbreviation: candidate,
            }));
        }
    }

    tracing::warn!(%base, "Exhausted abbreviation candidates");
    Err(AppError::Core(CoreError::Conflict(format!(
        "No free abbreviation derived from '{base}'"
    ))))
}

/// GET /api/v1/projects/by-abbreviation/{abbreviation}
pub async fn get_by_abbreviation(
    State(state): State<AppState>,
    Path(abbreviation): Path<String>,
) -> AppResult<Json<Project>> {
    let abbreviation = normalize_abbreviation(&abbreviation);
    let project = ProjectRepo::find_by_abbreviation(&state.pool, &abbreviation)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundBy {
                entity: "Project",
                field: "abbreviation",
                value: abbreviation.clone(),
            })
        })?;
    Ok(Json(project))
}
