//! Idea use cases.

mod create_idea;
mod delete_idea;
mod queries;
mod update_idea;

pub use create_idea::{CreateIdeaCommand, CreateIdeaHandler};
pub use delete_idea::DeleteIdeaHandler;
pub use queries::ListIdeasHandler;
pub use update_idea::{UpdateIdeaCommand, UpdateIdeaHandler};
