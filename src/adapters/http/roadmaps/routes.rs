//! HTTP routes for roadmap, phase and item endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    create_item, create_phase, create_roadmap, delete_item, delete_phase, delete_roadmap,
    get_roadmap, list_roadmaps, update_item, update_phase, update_roadmap, RoadmapsHandlers,
};

/// Creates the roadmaps router, including nested phase and item routes.
pub fn roadmaps_routes(handlers: RoadmapsHandlers) -> Router {
    Router::new()
        .route("/", post(create_roadmap))
        .route("/", get(list_roadmaps))
        .route("/:id", get(get_roadmap))
        .route("/:id", put(update_roadmap))
        .route("/:id", delete(delete_roadmap))
        .route("/:id/phases", post(create_phase))
        .route("/phases/:id", put(update_phase))
        .route("/phases/:id", delete(delete_phase))
        .route("/phases/:id/items", post(create_item))
        .route("/items/:id", put(update_item))
        .route("/items/:id", delete(delete_item))
        .with_state(handlers)
}
