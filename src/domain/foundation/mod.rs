//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the DevPlanKit domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ConversationId, IdeaId, ItemId, MessageId, PhaseId, ProjectId, RoadmapId, UserId};
pub use timestamp::Timestamp;
