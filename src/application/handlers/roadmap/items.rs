//! Item create/update/delete handlers.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ItemId, PhaseId};
use crate::domain::roadmap::{ItemStatus, LearningItem};
use crate::ports::{NewItem, RoadmapRepository};

/// Command to create an item.
#[derive(Debug, Clone)]
pub struct CreateItemCommand {
    pub phase_id: PhaseId,
    pub name: String,
    pub status: ItemStatus,
    pub order_index: i32,
}

/// Command to update an item.
#[derive(Debug, Clone, Default)]
pub struct UpdateItemCommand {
    pub name: Option<String>,
    pub status: Option<ItemStatus>,
    pub order_index: Option<i32>,
}

/// Handlers for item operations.
pub struct ItemHandlers {
    roadmaps: Arc<dyn RoadmapRepository>,
}

impl ItemHandlers {
    pub fn new(roadmaps: Arc<dyn RoadmapRepository>) -> Self {
        Self { roadmaps }
    }

    pub async fn create(&self, cmd: CreateItemCommand) -> Result<LearningItem, DomainError> {
        LearningItem::validate_name(&cmd.name)?;
        self.roadmaps
            .create_item(NewItem {
                phase_id: cmd.phase_id,
                name: cmd.name,
                status: cmd.status,
                order_index: cmd.order_index,
            })
            .await
    }

    pub async fn update(&self, id: ItemId, cmd: UpdateItemCommand) -> Result<(), DomainError> {
        if let Some(name) = &cmd.name {
            LearningItem::validate_name(name)?;
        }
        self.roadmaps
            .update_item(id, cmd.name, cmd.status, cmd.order_index)
            .await
    }

    pub async fn delete(&self, id: ItemId) -> Result<(), DomainError> {
        self.roadmaps.delete_item(id).await
    }
}
