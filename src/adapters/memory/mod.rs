//! In-memory repository adapters.
//!
//! Back the repository ports with `Arc<RwLock<HashMap>>` maps. Used by
//! handler tests and the HTTP integration tests; cloning shares state.

mod conversation_repository;
mod idea_repository;
mod project_repository;
mod roadmap_repository;

pub use conversation_repository::InMemoryConversationRepository;
pub use idea_repository::InMemoryIdeaRepository;
pub use project_repository::InMemoryProjectRepository;
pub use roadmap_repository::InMemoryRoadmapRepository;
