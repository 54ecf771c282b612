//! In-memory IdeaRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode, IdeaId, UserId};
use crate::domain::idea::Idea;
use crate::ports::IdeaRepository;

/// HashMap-backed idea repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdeaRepository {
    ideas: Arc<RwLock<HashMap<IdeaId, Idea>>>,
}

impl InMemoryIdeaRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdeaRepository for InMemoryIdeaRepository {
    async fn create(&self, idea: &Idea) -> Result<(), DomainError> {
        self.ideas.write().unwrap().insert(idea.id(), idea.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: IdeaId) -> Result<Option<Idea>, DomainError> {
        Ok(self.ideas.read().unwrap().get(&id).cloned())
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<Idea>, DomainError> {
        let mut ideas: Vec<Idea> = self
            .ideas
            .read()
            .unwrap()
            .values()
            .filter(|i| i.user_id() == user_id)
            .cloned()
            .collect();
        ideas.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(ideas)
    }

    async fn update(&self, idea: &Idea) -> Result<(), DomainError> {
        let mut ideas = self.ideas.write().unwrap();
        if !ideas.contains_key(&idea.id()) {
            return Err(DomainError::not_found(
                ErrorCode::IdeaNotFound,
                "Idea",
                idea.id(),
            ));
        }
        ideas.insert(idea.id(), idea.clone());
        Ok(())
    }

    async fn delete(&self, id: IdeaId) -> Result<(), DomainError> {
        if self.ideas.write().unwrap().remove(&id).is_none() {
            return Err(DomainError::not_found(ErrorCode::IdeaNotFound, "Idea", id));
        }
        Ok(())
    }
}
