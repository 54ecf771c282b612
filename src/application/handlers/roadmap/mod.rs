//! Learning roadmap use cases.

mod items;
mod manage_roadmap;
mod phases;
mod queries;

pub use items::{CreateItemCommand, ItemHandlers, UpdateItemCommand};
pub use manage_roadmap::{CreateRoadmapCommand, RoadmapHandlers, UpdateRoadmapCommand};
pub use phases::{CreatePhaseCommand, PhaseHandlers, UpdatePhaseCommand};
pub use queries::{GetRoadmapHandler, ListRoadmapsHandler};
