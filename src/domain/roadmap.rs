//! Learning roadmap aggregate: roadmap -> ordered phases -> ordered items.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, ItemId, PhaseId, RoadmapId, Timestamp, UserId, ValidationError,
};

/// Maximum length for roadmap and phase names.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for an item name.
pub const MAX_ITEM_NAME_LENGTH: usize = 255;

/// Maximum length for a roadmap description.
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Completion status of a learning item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl ItemStatus {
    /// Database/wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::InProgress => "in_progress",
            ItemStatus::Completed => "completed",
        }
    }
}

impl std::str::FromStr for ItemStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ItemStatus::Pending),
            "in_progress" => Ok(ItemStatus::InProgress),
            "completed" => Ok(ItemStatus::Completed),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown item status '{}'", other),
            )),
        }
    }
}

/// A single learning item within a phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningItem {
    pub id: ItemId,
    pub phase_id: PhaseId,
    pub name: String,
    pub status: ItemStatus,
    pub order_index: i32,
    pub created_at: Timestamp,
}

impl LearningItem {
    /// Validates an item name.
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        if name.len() > MAX_ITEM_NAME_LENGTH {
            return Err(
                ValidationError::too_long("name", MAX_ITEM_NAME_LENGTH, name.len()).into(),
            );
        }
        Ok(())
    }
}

/// A named phase grouping items, ordered within its roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPhase {
    pub id: PhaseId,
    pub roadmap_id: RoadmapId,
    pub name: String,
    pub order_index: i32,
    pub created_at: Timestamp,
    /// Items ordered by `order_index`; populated by the repository.
    pub items: Vec<LearningItem>,
}

impl LearningPhase {
    /// Validates a phase name.
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(ValidationError::too_long("name", MAX_NAME_LENGTH, name.len()).into());
        }
        Ok(())
    }

    /// Sorts items into display order.
    pub fn sort_items(&mut self) {
        self.items.sort_by_key(|item| item.order_index);
    }
}

/// Roadmap progress summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoadmapProgress {
    pub completed: u32,
    pub total: u32,
    pub percentage: u32,
}

/// Learning roadmap aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningRoadmap {
    id: RoadmapId,
    user_id: UserId,
    name: String,
    description: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
    /// Phases ordered by `order_index`; populated by the repository.
    phases: Vec<LearningPhase>,
}

impl LearningRoadmap {
    /// Validates roadmap fields for creation or update.
    pub fn validate(name: &str, description: Option<&str>) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(ValidationError::too_long("name", MAX_NAME_LENGTH, name.len()).into());
        }
        if let Some(desc) = description {
            if desc.len() > MAX_DESCRIPTION_LENGTH {
                return Err(ValidationError::too_long(
                    "description",
                    MAX_DESCRIPTION_LENGTH,
                    desc.len(),
                )
                .into());
            }
        }
        Ok(())
    }

    /// Reconstitutes a roadmap from persistence.
    pub fn reconstitute(
        id: RoadmapId,
        user_id: UserId,
        name: String,
        description: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
        mut phases: Vec<LearningPhase>,
    ) -> Self {
        phases.sort_by_key(|phase| phase.order_index);
        for phase in &mut phases {
            phase.sort_items();
        }
        Self {
            id,
            user_id,
            name,
            description,
            created_at,
            updated_at,
            phases,
        }
    }

    pub fn id(&self) -> RoadmapId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn phases(&self) -> &[LearningPhase] {
        &self.phases
    }

    /// Completed/total item counts with a rounded percentage.
    ///
    /// An empty roadmap reports zero percent.
    pub fn progress(&self) -> RoadmapProgress {
        let mut completed = 0u32;
        let mut total = 0u32;

        for phase in &self.phases {
            for item in &phase.items {
                total += 1;
                if item.status == ItemStatus::Completed {
                    completed += 1;
                }
            }
        }

        let percentage = if total > 0 {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        } else {
            0
        };

        RoadmapProgress {
            completed,
            total,
            percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(phase_id: PhaseId, order: i32, status: ItemStatus) -> LearningItem {
        LearningItem {
            id: ItemId::from_raw(order as i64),
            phase_id,
            name: format!("item {}", order),
            status,
            order_index: order,
            created_at: Timestamp::now(),
        }
    }

    fn roadmap_with(items: Vec<LearningItem>) -> LearningRoadmap {
        let phase = LearningPhase {
            id: PhaseId::from_raw(1),
            roadmap_id: RoadmapId::from_raw(1),
            name: "Phase 1".to_string(),
            order_index: 0,
            created_at: Timestamp::now(),
            items,
        };
        LearningRoadmap::reconstitute(
            RoadmapId::from_raw(1),
            UserId::new(),
            "Learn Rust".to_string(),
            None,
            Timestamp::now(),
            Timestamp::now(),
            vec![phase],
        )
    }

    #[test]
    fn empty_roadmap_reports_zero_progress() {
        let roadmap = roadmap_with(vec![]);
        let progress = roadmap.progress();
        assert_eq!(progress.total, 0);
        assert_eq!(progress.percentage, 0);
    }

    #[test]
    fn progress_rounds_percentage() {
        let phase_id = PhaseId::from_raw(1);
        let roadmap = roadmap_with(vec![
            item(phase_id, 0, ItemStatus::Completed),
            item(phase_id, 1, ItemStatus::Pending),
            item(phase_id, 2, ItemStatus::InProgress),
        ]);
        let progress = roadmap.progress();
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.percentage, 33);
    }

    #[test]
    fn reconstitute_sorts_phases_and_items() {
        let phase_id = PhaseId::from_raw(1);
        let roadmap = roadmap_with(vec![
            item(phase_id, 2, ItemStatus::Pending),
            item(phase_id, 0, ItemStatus::Pending),
            item(phase_id, 1, ItemStatus::Pending),
        ]);
        let orders: Vec<i32> = roadmap.phases()[0]
            .items
            .iter()
            .map(|i| i.order_index)
            .collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn validate_rejects_long_name() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(LearningRoadmap::validate(&long, None).is_err());
    }

    #[test]
    fn item_status_roundtrips_through_str() {
        for status in [
            ItemStatus::Pending,
            ItemStatus::InProgress,
            ItemStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<ItemStatus>().unwrap(), status);
        }
    }
}
