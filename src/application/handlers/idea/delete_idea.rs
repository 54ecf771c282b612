//! DeleteIdeaHandler - removes an idea.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, IdeaId};
use crate::ports::IdeaRepository;

/// Handler for idea deletion.
pub struct DeleteIdeaHandler {
    ideas: Arc<dyn IdeaRepository>,
}

impl DeleteIdeaHandler {
    pub fn new(ideas: Arc<dyn IdeaRepository>) -> Self {
        Self { ideas }
    }

    pub async fn handle(&self, id: IdeaId) -> Result<(), DomainError> {
        self.ideas.delete(id).await
    }
}
