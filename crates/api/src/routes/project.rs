//! Route definitions for the `/projects` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list (?with_works=&is_active=)
/// POST   /                                  -> create
/// GET    /exists                            -> check_existence (?name=&project_id=)
/// GET    /abbreviation                      -> suggest (?name=)
/// GET    /by-abbreviation/{abbreviation}    -> get_by_abbreviation
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// POST   /{id}/restore                      -> restore
/// GET    /{id}/versions                     -> list_versions
/// GET    /{id}/works                        -> list_works
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/exists", get(project::check_existence))
        .route("/abbreviation", get(project::suggest))
        .route(
            "/by-abbreviation/{abbreviation}",
            get(project::get_by_abbreviation),
        )
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/restore", post(project::restore))
        .route("/{id}/versions", get(project::list_versions))
        .route("/{id}/works", get(project::list_works))
}
