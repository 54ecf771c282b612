//! Project endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest, UserQuery};
pub use handlers::ProjectsHandlers;
pub use routes::projects_routes;
