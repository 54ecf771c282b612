//! Roadmap repository port.
//!
//! Covers the whole aggregate: roadmaps, their phases, and phase items.
//! Fetching a roadmap hydrates phases and items ordered by `order_index`.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ItemId, PhaseId, RoadmapId, UserId};
use crate::domain::roadmap::{ItemStatus, LearningItem, LearningPhase, LearningRoadmap};

/// Fields for creating a phase.
#[derive(Debug, Clone)]
pub struct NewPhase {
    pub roadmap_id: RoadmapId,
    pub name: String,
    pub order_index: i32,
}

/// Fields for creating an item.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub phase_id: PhaseId,
    pub name: String,
    pub status: ItemStatus,
    pub order_index: i32,
}

/// Port for learning roadmap persistence.
#[async_trait]
pub trait RoadmapRepository: Send + Sync {
    /// Persists a new roadmap and returns it with its assigned ID.
    async fn create(
        &self,
        user_id: UserId,
        name: String,
        description: Option<String>,
    ) -> Result<LearningRoadmap, DomainError>;

    /// Finds a roadmap with its full phase/item tree.
    async fn find_by_id(&self, id: RoadmapId) -> Result<Option<LearningRoadmap>, DomainError>;

    /// Lists a user's roadmaps (without hydrating phase trees).
    async fn list(&self, user_id: UserId) -> Result<Vec<LearningRoadmap>, DomainError>;

    /// Updates roadmap name/description, touching `updated_at`.
    async fn update(
        &self,
        id: RoadmapId,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<(), DomainError>;

    /// Deletes a roadmap and its phases/items.
    async fn delete(&self, id: RoadmapId) -> Result<(), DomainError>;

    /// Creates a phase and returns it with its assigned ID.
    async fn create_phase(&self, phase: NewPhase) -> Result<LearningPhase, DomainError>;

    /// Updates a phase's name and/or position.
    async fn update_phase(
        &self,
        id: PhaseId,
        name: Option<String>,
        order_index: Option<i32>,
    ) -> Result<(), DomainError>;

    /// Deletes a phase and its items.
    async fn delete_phase(&self, id: PhaseId) -> Result<(), DomainError>;

    /// Creates an item and returns it with its assigned ID.
    async fn create_item(&self, item: NewItem) -> Result<LearningItem, DomainError>;

    /// Updates an item's name, status and/or position.
    async fn update_item(
        &self,
        id: ItemId,
        name: Option<String>,
        status: Option<ItemStatus>,
        order_index: Option<i32>,
    ) -> Result<(), DomainError>;

    /// Deletes an item.
    async fn delete_item(&self, id: ItemId) -> Result<(), DomainError>;
}
