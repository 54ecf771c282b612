//! HTTP DTOs for project endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;
use crate::domain::project::{Project, ProjectStatus, ProjectType};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub user_id: UserId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub project_type: ProjectType,
    pub production_url: Option<String>,
    pub repository_url: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub extra_urls: Vec<String>,
}

/// Request to update a project. Absent fields are left unchanged; explicit
/// nulls for the URL fields clear them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub project_type: Option<ProjectType>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub production_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub repository_url: Option<Option<String>>,
    pub tech_stack: Option<Vec<String>>,
    pub extra_urls: Option<Vec<String>>,
}

/// Distinguishes an absent field from an explicit null.
fn deserialize_nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Some(Option::deserialize(deserializer)?))
}

/// Query parameters for list endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: UserId,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Project as exposed over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub project_type: ProjectType,
    pub production_url: Option<String>,
    pub repository_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub extra_urls: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            user_id: project.user_id().to_string(),
            name: project.name().to_string(),
            description: project.description().to_string(),
            status: project.status(),
            project_type: project.project_type(),
            production_url: project.production_url().map(str::to_string),
            repository_url: project.repository_url().map(str::to_string),
            tech_stack: project.tech_stack().to_vec(),
            extra_urls: project.extra_urls().to_vec(),
            created_at: project.created_at().to_string(),
            updated_at: project.updated_at().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_camel_case() {
        let json = r#"{
            "userId": "550e8400-e29b-41d4-a716-446655440000",
            "name": "DevPlanKit",
            "status": "planning",
            "projectType": "client",
            "productionUrl": null,
            "repositoryUrl": "https://github.com/x/y",
            "techStack": ["rust"]
        }"#;

        let req: CreateProjectRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "DevPlanKit");
        assert_eq!(req.project_type, ProjectType::Client);
        assert_eq!(req.tech_stack, vec!["rust"]);
        assert!(req.extra_urls.is_empty());
    }

    #[test]
    fn update_request_distinguishes_absent_from_null() {
        let absent: UpdateProjectRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(absent.production_url.is_none());

        let null: UpdateProjectRequest =
            serde_json::from_str(r#"{"productionUrl": null}"#).unwrap();
        assert_eq!(null.production_url, Some(None));

        let set: UpdateProjectRequest =
            serde_json::from_str(r#"{"productionUrl": "https://x.dev"}"#).unwrap();
        assert_eq!(set.production_url, Some(Some("https://x.dev".to_string())));
    }
}
