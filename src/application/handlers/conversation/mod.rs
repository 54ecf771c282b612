//! Conversation use cases.

mod manage_conversations;
mod messages;

pub use manage_conversations::{ConversationHandlers, CreateConversationCommand};
pub use messages::{AppendMessageCommand, MessageHandlers};
