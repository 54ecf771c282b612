//! HTTP DTOs for roadmap, phase and item endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;
use crate::domain::roadmap::{ItemStatus, LearningItem, LearningPhase, LearningRoadmap};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a roadmap.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoadmapRequest {
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
}

/// Request to update a roadmap. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoadmapRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Request to create a phase within a roadmap.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhaseRequest {
    pub name: String,
    #[serde(default)]
    pub order_index: i32,
}

/// Request to update a phase.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePhaseRequest {
    pub name: Option<String>,
    pub order_index: Option<i32>,
}

/// Request to create an item within a phase.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub order_index: i32,
}

/// Request to update an item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub status: Option<ItemStatus>,
    pub order_index: Option<i32>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Item as exposed over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: i64,
    pub phase_id: i64,
    pub name: String,
    pub status: ItemStatus,
    pub order_index: i32,
    pub created_at: String,
}

impl From<&LearningItem> for ItemResponse {
    fn from(item: &LearningItem) -> Self {
        Self {
            id: item.id.as_i64(),
            phase_id: item.phase_id.as_i64(),
            name: item.name.clone(),
            status: item.status,
            order_index: item.order_index,
            created_at: item.created_at.to_string(),
        }
    }
}

/// Phase with its items as exposed over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseResponse {
    pub id: i64,
    pub roadmap_id: i64,
    pub name: String,
    pub order_index: i32,
    pub created_at: String,
    pub items: Vec<ItemResponse>,
}

impl From<&LearningPhase> for PhaseResponse {
    fn from(phase: &LearningPhase) -> Self {
        Self {
            id: phase.id.as_i64(),
            roadmap_id: phase.roadmap_id.as_i64(),
            name: phase.name.clone(),
            order_index: phase.order_index,
            created_at: phase.created_at.to_string(),
            items: phase.items.iter().map(ItemResponse::from).collect(),
        }
    }
}

/// Progress summary for a roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub completed: u32,
    pub total: u32,
    pub percentage: u32,
}

/// Roadmap with its full phase/item tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResponse {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub phases: Vec<PhaseResponse>,
    pub progress: ProgressResponse,
}

impl From<&LearningRoadmap> for RoadmapResponse {
    fn from(roadmap: &LearningRoadmap) -> Self {
        let progress = roadmap.progress();
        Self {
            id: roadmap.id().as_i64(),
            user_id: roadmap.user_id().to_string(),
            name: roadmap.name().to_string(),
            description: roadmap.description().map(str::to_string),
            created_at: roadmap.created_at().to_string(),
            updated_at: roadmap.updated_at().to_string(),
            phases: roadmap.phases().iter().map(PhaseResponse::from).collect(),
            progress: ProgressResponse {
                completed: progress.completed,
                total: progress.total,
                percentage: progress.percentage,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PhaseId, RoadmapId, Timestamp};

    #[test]
    fn roadmap_response_includes_progress() {
        let phase = LearningPhase {
            id: PhaseId::from_raw(1),
            roadmap_id: RoadmapId::from_raw(7),
            name: "Basics".to_string(),
            order_index: 0,
            created_at: Timestamp::now(),
            items: vec![],
        };
        let roadmap = LearningRoadmap::reconstitute(
            RoadmapId::from_raw(7),
            UserId::new(),
            "Learn Rust".to_string(),
            None,
            Timestamp::now(),
            Timestamp::now(),
            vec![phase],
        );

        let response = RoadmapResponse::from(&roadmap);
        assert_eq!(response.id, 7);
        assert_eq!(response.phases.len(), 1);
        assert_eq!(response.progress.percentage, 0);
    }

    #[test]
    fn item_status_serializes_snake_case() {
        let json = serde_json::to_string(&ItemStatus::InProgress).unwrap();
        assert_eq!(json, r#""in_progress""#);
    }
}
