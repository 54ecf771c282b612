//! Conversation endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AppendMessageRequest, ConversationResponse, CreateConversationRequest, MessageResponse,
};
pub use handlers::ConversationsHandlers;
pub use routes::conversations_routes;
