//! Roadmap create/update/delete handlers.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RoadmapId, UserId};
use crate::domain::roadmap::LearningRoadmap;
use crate::ports::RoadmapRepository;

/// Command to create a roadmap.
#[derive(Debug, Clone)]
pub struct CreateRoadmapCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
}

/// Command to update a roadmap.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoadmapCommand {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Handlers for roadmap lifecycle operations.
pub struct RoadmapHandlers {
    roadmaps: Arc<dyn RoadmapRepository>,
}

impl RoadmapHandlers {
    pub fn new(roadmaps: Arc<dyn RoadmapRepository>) -> Self {
        Self { roadmaps }
    }

    pub async fn create(&self, cmd: CreateRoadmapCommand) -> Result<LearningRoadmap, DomainError> {
        LearningRoadmap::validate(&cmd.name, cmd.description.as_deref())?;
        self.roadmaps
            .create(cmd.user_id, cmd.name, cmd.description)
            .await
    }

    pub async fn update(
        &self,
        id: RoadmapId,
        cmd: UpdateRoadmapCommand,
    ) -> Result<(), DomainError> {
        if let Some(name) = &cmd.name {
            LearningRoadmap::validate(name, cmd.description.as_deref())?;
        }
        self.roadmaps.update(id, cmd.name, cmd.description).await
    }

    pub async fn delete(&self, id: RoadmapId) -> Result<(), DomainError> {
        self.roadmaps.delete(id).await
    }
}
