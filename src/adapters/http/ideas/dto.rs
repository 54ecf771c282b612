//! HTTP DTOs for idea endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;
use crate::domain::idea::Idea;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to capture an idea.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIdeaRequest {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
}

/// Request to edit an idea. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIdeaRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Idea as exposed over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub created_at: String,
}

impl From<&Idea> for IdeaResponse {
    fn from(idea: &Idea) -> Self {
        Self {
            id: idea.id().to_string(),
            user_id: idea.user_id().to_string(),
            title: idea.title().to_string(),
            description: idea.description().to_string(),
            created_at: idea.created_at().to_string(),
        }
    }
}
