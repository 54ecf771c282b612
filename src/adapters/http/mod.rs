//! HTTP adapters - REST API implementations.
//!
//! Each module owns its routes, handlers and DTOs. `api_router` assembles
//! the full surface under `/api` with tracing and CORS applied.

pub mod chat;
pub mod conversations;
pub mod error;
pub mod ideas;
pub mod projects;
pub mod requirements;
pub mod roadmaps;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::ErrorResponse;

/// Assembles the full API router.
pub fn api_router(
    projects: projects::ProjectsHandlers,
    requirements: requirements::RequirementsHandlers,
    ideas: ideas::IdeasHandlers,
    roadmaps: roadmaps::RoadmapsHandlers,
    conversations: conversations::ConversationsHandlers,
    chat: chat::ChatHandlers,
) -> Router {
    Router::new()
        .nest("/api/projects", projects::projects_routes(projects))
        .nest(
            "/api/projects/:project_id/requirements",
            requirements::requirements_routes(requirements),
        )
        .nest("/api/ideas", ideas::ideas_routes(ideas))
        .nest("/api/roadmaps", roadmaps::roadmaps_routes(roadmaps))
        .nest(
            "/api/conversations",
            conversations::conversations_routes(conversations),
        )
        .nest("/api/chat", chat::chat_routes(chat))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
