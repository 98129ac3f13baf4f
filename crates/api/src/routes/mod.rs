pub mod health;
pub mod project;

use axum::routing::get;
use axum::Router;

use crate::handlers::reference;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        project resource (see routes::project)
///
/// /project-states                                  list
/// /types                                           list
/// /types/{id}/sub-types                            list sub-types of a type
/// /proponents                                      list, create
/// /regions                                         list (?entity_type=ENV|FLNR)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .route("/project-states", get(reference::list_project_states))
        .route("/types", get(reference::list_types))
        .route("/types/{id}/sub-types", get(reference::list_sub_types))
        .route(
            "/proponents",
            get(reference::list_proponents).post(reference::create_proponent),
        )
        .route("/regions", get(reference::list_regions))
}
