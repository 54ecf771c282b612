//! Phase create/update/delete handlers.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PhaseId, RoadmapId};
use crate::domain::roadmap::LearningPhase;
use crate::ports::{NewPhase, RoadmapRepository};

/// Command to create a phase.
#[derive(Debug, Clone)]
pub struct CreatePhaseCommand {
    pub roadmap_id: RoadmapId,
    pub name: String,
    pub order_index: i32,
}

/// Command to update a phase.
#[derive(Debug, Clone, Default)]
pub struct UpdatePhaseCommand {
    pub name: Option<String>,
    pub order_index: Option<i32>,
}

/// Handlers for phase operations.
pub struct PhaseHandlers {
    roadmaps: Arc<dyn RoadmapRepository>,
}

impl PhaseHandlers {
    pub fn new(roadmaps: Arc<dyn RoadmapRepository>) -> Self {
        Self { roadmaps }
    }

    pub async fn create(&self, cmd: CreatePhaseCommand) -> Result<LearningPhase, DomainError> {
        LearningPhase::validate_name(&cmd.name)?;
        self.roadmaps
            .create_phase(NewPhase {
                roadmap_id: cmd.roadmap_id,
                name: cmd.name,
                order_index: cmd.order_index,
            })
            .await
    }

    pub async fn update(&self, id: PhaseId, cmd: UpdatePhaseCommand) -> Result<(), DomainError> {
        if let Some(name) = &cmd.name {
            LearningPhase::validate_name(name)?;
        }
        self.roadmaps
            .update_phase(id, cmd.name, cmd.order_index)
            .await
    }

    pub async fn delete(&self, id: PhaseId) -> Result<(), DomainError> {
        self.roadmaps.delete_phase(id).await
    }
}
