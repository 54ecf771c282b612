//! HTTP routes for requirements document endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    apply_suggestion, create_document, export_document, load_document, save_document,
    RequirementsHandlers,
};

/// Creates the requirements router, nested under a project path.
pub fn requirements_routes(handlers: RequirementsHandlers) -> Router {
    Router::new()
        .route("/", get(load_document))
        .route("/", post(create_document))
        .route("/", put(save_document))
        .route("/apply", post(apply_suggestion))
        .route("/export", get(export_document))
        .with_state(handlers)
}
