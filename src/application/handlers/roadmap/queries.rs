//! Roadmap queries.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, RoadmapId, UserId};
use crate::domain::roadmap::LearningRoadmap;
use crate::ports::RoadmapRepository;

/// Handler for fetching a roadmap with its full phase/item tree.
pub struct GetRoadmapHandler {
    roadmaps: Arc<dyn RoadmapRepository>,
}

impl GetRoadmapHandler {
    pub fn new(roadmaps: Arc<dyn RoadmapRepository>) -> Self {
        Self { roadmaps }
    }

    pub async fn handle(&self, id: RoadmapId) -> Result<Option<LearningRoadmap>, DomainError> {
        self.roadmaps.find_by_id(id).await
    }
}

/// Handler for listing a user's roadmaps.
pub struct ListRoadmapsHandler {
    roadmaps: Arc<dyn RoadmapRepository>,
}

impl ListRoadmapsHandler {
    pub fn new(roadmaps: Arc<dyn RoadmapRepository>) -> Self {
        Self { roadmaps }
    }

    pub async fn handle(&self, user_id: UserId) -> Result<Vec<LearningRoadmap>, DomainError> {
        self.roadmaps.list(user_id).await
    }
}
