//! PostgreSQL adapters - database implementations of the repository ports.

mod conversation_repository;
mod idea_repository;
mod project_repository;
mod roadmap_repository;

pub use conversation_repository::PostgresConversationRepository;
pub use idea_repository::PostgresIdeaRepository;
pub use project_repository::PostgresProjectRepository;
pub use roadmap_repository::PostgresRoadmapRepository;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Maps a sqlx error to a domain error.
pub(crate) fn db_error(err: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Database error: {}", err))
}
