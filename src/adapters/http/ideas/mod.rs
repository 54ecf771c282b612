//! Idea endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateIdeaRequest, IdeaResponse, UpdateIdeaRequest};
pub use handlers::IdeasHandlers;
pub use routes::ideas_routes;
