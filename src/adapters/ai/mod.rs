//! AI adapters - implementations of the ChatProvider port.

mod mock_provider;
mod openrouter_provider;

pub use mock_provider::MockChatProvider;
pub use openrouter_provider::{OpenRouterConfig, OpenRouterProvider};
