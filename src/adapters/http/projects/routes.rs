//! HTTP routes for project endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    create_project, delete_project, get_project, list_projects, update_project, ProjectsHandlers,
};

/// Creates the projects router.
pub fn projects_routes(handlers: ProjectsHandlers) -> Router {
    Router::new()
        .route("/", post(create_project))
        .route("/", get(list_projects))
        .route("/:project_id", get(get_project))
        .route("/:project_id", put(update_project))
        .route("/:project_id", delete(delete_project))
        .with_state(handlers)
}
