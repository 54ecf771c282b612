//! Streaming chat endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatMessageDto, ChatRequestBody, RequirementsChatRequestBody};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
