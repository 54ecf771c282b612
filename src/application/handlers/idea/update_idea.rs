//! UpdateIdeaHandler - edits a captured idea.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, IdeaId};
use crate::domain::idea::Idea;
use crate::ports::IdeaRepository;

/// Command to update an idea.
#[derive(Debug, Clone, Default)]
pub struct UpdateIdeaCommand {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Handler for idea updates.
pub struct UpdateIdeaHandler {
    ideas: Arc<dyn IdeaRepository>,
}

impl UpdateIdeaHandler {
    pub fn new(ideas: Arc<dyn IdeaRepository>) -> Self {
        Self { ideas }
    }

    pub async fn handle(&self, id: IdeaId, cmd: UpdateIdeaCommand) -> Result<Idea, DomainError> {
        let mut idea = self
            .ideas
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ErrorCode::IdeaNotFound, "Idea", id))?;

        idea.update(cmd.title, cmd.description)?;
        self.ideas.update(&idea).await?;

        Ok(idea)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryIdeaRepository;
    use crate::domain::foundation::UserId;

    #[tokio::test]
    async fn updates_title_only() {
        let repo = Arc::new(InMemoryIdeaRepository::new());
        let idea = Idea::new(IdeaId::new(), UserId::new(), "old".into(), "desc".into()).unwrap();
        repo.create(&idea).await.unwrap();

        let updated = UpdateIdeaHandler::new(repo)
            .handle(
                idea.id(),
                UpdateIdeaCommand {
                    title: Some("new".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title(), "new");
        assert_eq!(updated.description(), "desc");
    }

    #[tokio::test]
    async fn missing_idea_is_not_found() {
        let handler = UpdateIdeaHandler::new(Arc::new(InMemoryIdeaRepository::new()));
        let err = handler
            .handle(IdeaId::new(), UpdateIdeaCommand::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::IdeaNotFound);
    }
}
