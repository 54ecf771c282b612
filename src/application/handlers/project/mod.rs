//! Project use cases.

mod create_project;
mod delete_project;
mod queries;
mod update_project;

pub use create_project::{CreateProjectCommand, CreateProjectHandler};
pub use delete_project::DeleteProjectHandler;
pub use queries::{GetProjectHandler, ListProjectsHandler};
pub use update_project::{UpdateProjectCommand, UpdateProjectHandler};
