//! CreateIdeaHandler - captures a new idea.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, IdeaId, UserId};
use crate::domain::idea::Idea;
use crate::ports::IdeaRepository;

/// Command to capture an idea.
#[derive(Debug, Clone)]
pub struct CreateIdeaCommand {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
}

/// Handler for idea creation.
pub struct CreateIdeaHandler {
    ideas: Arc<dyn IdeaRepository>,
}

impl CreateIdeaHandler {
    pub fn new(ideas: Arc<dyn IdeaRepository>) -> Self {
        Self { ideas }
    }

    pub async fn handle(&self, cmd: CreateIdeaCommand) -> Result<Idea, DomainError> {
        let idea = Idea::new(IdeaId::new(), cmd.user_id, cmd.title, cmd.description)?;
        self.ideas.create(&idea).await?;
        Ok(idea)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryIdeaRepository;

    #[tokio::test]
    async fn creates_and_persists_idea() {
        let repo = Arc::new(InMemoryIdeaRepository::new());
        let handler = CreateIdeaHandler::new(repo.clone());

        let idea = handler
            .handle(CreateIdeaCommand {
                user_id: UserId::new(),
                title: "CLI time tracker".to_string(),
                description: "Track time from the terminal".to_string(),
            })
            .await
            .unwrap();

        assert!(repo.find_by_id(idea.id()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn rejects_empty_title() {
        let handler = CreateIdeaHandler::new(Arc::new(InMemoryIdeaRepository::new()));
        let result = handler
            .handle(CreateIdeaCommand {
                user_id: UserId::new(),
                title: String::new(),
                description: "desc".to_string(),
            })
            .await;
        assert!(result.is_err());
    }
}
