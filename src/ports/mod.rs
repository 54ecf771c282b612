//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - Repositories (`ProjectRepository`, `IdeaRepository`, `RoadmapRepository`,
//!   `ConversationRepository`) - relational persistence for the entities
//! - `DocumentStore` - object storage for requirements documents
//! - `ChatProvider` - streaming LLM completions

mod chat_provider;
mod conversation_repository;
mod document_store;
mod idea_repository;
mod project_repository;
mod roadmap_repository;

pub use chat_provider::{
    ChatChunk, ChatError, ChatMessage, ChatProvider, ChatRequest, ChatRole, ChatStream,
};
pub use conversation_repository::ConversationRepository;
pub use document_store::{DocumentStore, StoreError};
pub use idea_repository::IdeaRepository;
pub use project_repository::ProjectRepository;
pub use roadmap_repository::{NewItem, NewPhase, RoadmapRepository};
