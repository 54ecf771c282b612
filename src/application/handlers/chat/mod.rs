//! Chat streaming use cases.

mod prompts;
mod stream_chat;

pub use prompts::{assistant_system_prompt, requirements_system_prompt};
pub use stream_chat::{ChatSurface, StreamChatCommand, StreamChatHandler};
