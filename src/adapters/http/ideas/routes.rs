//! HTTP routes for idea endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{create_idea, delete_idea, list_ideas, update_idea, IdeasHandlers};

/// Creates the ideas router.
pub fn ideas_routes(handlers: IdeasHandlers) -> Router {
    Router::new()
        .route("/", post(create_idea))
        .route("/", get(list_ideas))
        .route("/:id", put(update_idea))
        .route("/:id", delete(delete_idea))
        .with_state(handlers)
}
