//! Idea repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, IdeaId, UserId};
use crate::domain::idea::Idea;

/// Port for idea persistence.
///
/// `list` returns ideas ordered by `created_at` descending (newest first).
#[async_trait]
pub trait IdeaRepository: Send + Sync {
    /// Persists a new idea.
    async fn create(&self, idea: &Idea) -> Result<(), DomainError>;

    /// Finds an idea by ID.
    async fn find_by_id(&self, id: IdeaId) -> Result<Option<Idea>, DomainError>;

    /// Lists a user's ideas, newest first.
    async fn list(&self, user_id: UserId) -> Result<Vec<Idea>, DomainError>;

    /// Persists changes to an existing idea.
    async fn update(&self, idea: &Idea) -> Result<(), DomainError>;

    /// Deletes an idea.
    async fn delete(&self, id: IdeaId) -> Result<(), DomainError>;
}
