//! Idea queries.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::idea::Idea;
use crate::ports::IdeaRepository;

/// Handler for listing a user's ideas, newest first.
pub struct ListIdeasHandler {
    ideas: Arc<dyn IdeaRepository>,
}

impl ListIdeasHandler {
    pub fn new(ideas: Arc<dyn IdeaRepository>) -> Self {
        Self { ideas }
    }

    pub async fn handle(&self, user_id: UserId) -> Result<Vec<Idea>, DomainError> {
        self.ideas.list(user_id).await
    }
}
