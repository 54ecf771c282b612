//! Learning roadmap endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateItemRequest, CreatePhaseRequest, CreateRoadmapRequest, ItemResponse, PhaseResponse,
    ProgressResponse, RoadmapResponse, UpdateItemRequest, UpdatePhaseRequest, UpdateRoadmapRequest,
};
pub use handlers::RoadmapsHandlers;
pub use routes::roadmaps_routes;
