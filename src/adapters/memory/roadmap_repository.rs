//! In-memory RoadmapRepository.
//!
//! Serial IDs are issued from a shared counter, mirroring the database
//! sequences the Postgres adapter relies on.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::foundation::{
    DomainError, ErrorCode, ItemId, PhaseId, RoadmapId, Timestamp, UserId,
};
use crate::domain::roadmap::{ItemStatus, LearningItem, LearningPhase, LearningRoadmap};
use crate::ports::{NewItem, NewPhase, RoadmapRepository};

#[derive(Debug, Clone)]
struct RoadmapRecord {
    user_id: UserId,
    name: String,
    description: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// HashMap-backed roadmap repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoadmapRepository {
    roadmaps: Arc<RwLock<HashMap<RoadmapId, RoadmapRecord>>>,
    phases: Arc<RwLock<HashMap<PhaseId, LearningPhase>>>,
    items: Arc<RwLock<HashMap<ItemId, LearningItem>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryRoadmapRepository {
    pub fn new() -> Self {
        Self {
            next_id: Arc::new(AtomicI64::new(1)),
            ..Default::default()
        }
    }

    fn issue_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    fn hydrate(&self, id: RoadmapId, record: &RoadmapRecord) -> LearningRoadmap {
        let items = self.items.read().unwrap();
        let phases: Vec<LearningPhase> = self
            .phases
            .read()
            .unwrap()
            .values()
            .filter(|p| p.roadmap_id == id)
            .map(|p| {
                let mut phase = p.clone();
                phase.items = items
                    .values()
                    .filter(|i| i.phase_id == phase.id)
                    .cloned()
                    .collect();
                phase
            })
            .collect();

        LearningRoadmap::reconstitute(
            id,
            record.user_id,
            record.name.clone(),
            record.description.clone(),
            record.created_at,
            record.updated_at,
            phases,
        )
    }
}

#[async_trait]
impl RoadmapRepository for InMemoryRoadmapRepository {
    async fn create(
        &self,
        user_id: UserId,
        name: String,
        description: Option<String>,
    ) -> Result<LearningRoadmap, DomainError> {
        let id = RoadmapId::from_raw(self.issue_id());
        let now = Timestamp::now();
        let record = RoadmapRecord {
            user_id,
            name,
            description,
            created_at: now,
            updated_at: now,
        };
        let roadmap = self.hydrate(id, &record);
        self.roadmaps.write().unwrap().insert(id, record);
        Ok(roadmap)
    }

    async fn find_by_id(&self, id: RoadmapId) -> Result<Option<LearningRoadmap>, DomainError> {
        let roadmaps = self.roadmaps.read().unwrap();
        Ok(roadmaps.get(&id).map(|record| self.hydrate(id, record)))
    }

    async fn list(&self, user_id: UserId) -> Result<Vec<LearningRoadmap>, DomainError> {
        let roadmaps = self.roadmaps.read().unwrap();
        let mut result: Vec<(RoadmapId, &RoadmapRecord)> = roadmaps
            .iter()
            .filter(|(_, r)| r.user_id == user_id)
            .map(|(id, r)| (*id, r))
            .collect();
        result.sort_by(|a, b| b.1.created_at.cmp(&a.1.created_at));

        Ok(result
            .into_iter()
            .map(|(id, record)| {
                LearningRoadmap::reconstitute(
                    id,
                    record.user_id,
                    record.name.clone(),
                    record.description.clone(),
                    record.created_at,
                    record.updated_at,
                    Vec::new(),
                )
            })
            .collect())
    }

    async fn update(
        &self,
        id: RoadmapId,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<(), DomainError> {
        let mut roadmaps = self.roadmaps.write().unwrap();
        let record = roadmaps.get_mut(&id).ok_or_else(|| {
            DomainError::not_found(ErrorCode::RoadmapNotFound, "Roadmap", id)
        })?;
        if let Some(name) = name {
            record.name = name;
        }
        if let Some(description) = description {
            record.description = Some(description);
        }
        record.updated_at = Timestamp::now();
        Ok(())
    }

    async fn delete(&self, id: RoadmapId) -> Result<(), DomainError> {
        if self.roadmaps.write().unwrap().remove(&id).is_none() {
            return Err(DomainError::not_found(
                ErrorCode::RoadmapNotFound,
                "Roadmap",
                id,
            ));
        }
        let phase_ids: Vec<PhaseId> = self
            .phases
            .read()
            .unwrap()
            .values()
            .filter(|p| p.roadmap_id == id)
            .map(|p| p.id)
            .collect();
        self.phases
            .write()
            .unwrap()
            .retain(|_, p| p.roadmap_id != id);
        self.items
            .write()
            .unwrap()
            .retain(|_, i| !phase_ids.contains(&i.phase_id));
        Ok(())
    }

    async fn create_phase(&self, phase: NewPhase) -> Result<LearningPhase, DomainError> {
        if !self.roadmaps.read().unwrap().contains_key(&phase.roadmap_id) {
            return Err(DomainError::not_found(
                ErrorCode::RoadmapNotFound,
                "Roadmap",
                phase.roadmap_id,
            ));
        }
        let created = LearningPhase {
            id: PhaseId::from_raw(self.issue_id()),
            roadmap_id: phase.roadmap_id,
            name: phase.name,
            order_index: phase.order_index,
            created_at: Timestamp::now(),
            items: Vec::new(),
        };
        self.phases
            .write()
            .unwrap()
            .insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_phase(
        &self,
        id: PhaseId,
        name: Option<String>,
        order_index: Option<i32>,
    ) -> Result<(), DomainError> {
        let mut phases = self.phases.write().unwrap();
        let phase = phases
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(ErrorCode::PhaseNotFound, "Phase", id))?;
        if let Some(name) = name {
            phase.name = name;
        }
        if let Some(order_index) = order_index {
            phase.order_index = order_index;
        }
        Ok(())
    }

    async fn delete_phase(&self, id: PhaseId) -> Result<(), DomainError> {
        if self.phases.write().unwrap().remove(&id).is_none() {
            return Err(DomainError::not_found(ErrorCode::PhaseNotFound, "Phase", id));
        }
        self.items.write().unwrap().retain(|_, i| i.phase_id != id);
        Ok(())
    }

    async fn create_item(&self, item: NewItem) -> Result<LearningItem, DomainError> {
        if !self.phases.read().unwrap().contains_key(&item.phase_id) {
            return Err(DomainError::not_found(
                ErrorCode::PhaseNotFound,
                "Phase",
                item.phase_id,
            ));
        }
        let created = LearningItem {
            id: ItemId::from_raw(self.issue_id()),
            phase_id: item.phase_id,
            name: item.name,
            status: item.status,
            order_index: item.order_index,
            created_at: Timestamp::now(),
        };
        self.items
            .write()
            .unwrap()
            .insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_item(
        &self,
        id: ItemId,
        name: Option<String>,
        status: Option<ItemStatus>,
        order_index: Option<i32>,
    ) -> Result<(), DomainError> {
        let mut items = self.items.write().unwrap();
        let item = items
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(ErrorCode::ItemNotFound, "Item", id))?;
        if let Some(name) = name {
            item.name = name;
        }
        if let Some(status) = status {
            item.status = status;
        }
        if let Some(order_index) = order_index {
            item.order_index = order_index;
        }
        Ok(())
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), DomainError> {
        if self.items.write().unwrap().remove(&id).is_none() {
            return Err(DomainError::not_found(ErrorCode::ItemNotFound, "Item", id));
        }
        Ok(())
    }
}
