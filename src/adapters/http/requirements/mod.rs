//! Requirements document endpoints, nested under a project.

mod dto;
mod handlers;
mod routes;

pub use dto::{ApplySuggestionRequest, ApplySuggestionResponse, DocumentResponse, SaveDocumentRequest};
pub use handlers::RequirementsHandlers;
pub use routes::requirements_routes;
