//! Project aggregate entity.
//!
//! A project is the unit developers track: status, type, links, tech stack,
//! and (stored separately in object storage) its requirements document.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ProjectId, Timestamp, UserId, ValidationError};

/// Maximum length for a project name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    InDevelopment,
    Completed,
    OnHold,
}

impl ProjectStatus {
    /// Database/wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InDevelopment => "in-development",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on-hold",
        }
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planning" => Ok(ProjectStatus::Planning),
            "in-development" => Ok(ProjectStatus::InDevelopment),
            "completed" => Ok(ProjectStatus::Completed),
            "on-hold" => Ok(ProjectStatus::OnHold),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown project status '{}'", other),
            )),
        }
    }
}

/// Whether a project is personal or for a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    Personal,
    Client,
}

impl ProjectType {
    /// Database/wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Personal => "personal",
            ProjectType::Client => "client",
        }
    }
}

impl std::str::FromStr for ProjectType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal" => Ok(ProjectType::Personal),
            "client" => Ok(ProjectType::Client),
            other => Err(ValidationError::invalid_format(
                "project_type",
                format!("unknown project type '{}'", other),
            )),
        }
    }
}

/// Project aggregate.
///
/// # Invariants
///
/// - `name` is 1-255 characters, non-empty
/// - `tech_stack` and `extra_urls` may be empty but never contain empty strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    user_id: UserId,
    name: String,
    description: String,
    status: ProjectStatus,
    project_type: ProjectType,
    production_url: Option<String>,
    repository_url: Option<String>,
    tech_stack: Vec<String>,
    extra_urls: Vec<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// Fields a project update may change.
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub project_type: Option<ProjectType>,
    pub production_url: Option<Option<String>>,
    pub repository_url: Option<Option<String>>,
    pub tech_stack: Option<Vec<String>>,
    pub extra_urls: Option<Vec<String>>,
}

impl Project {
    /// Creates a new project in the given status.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ProjectId,
        user_id: UserId,
        name: String,
        description: String,
        status: ProjectStatus,
        project_type: ProjectType,
        production_url: Option<String>,
        repository_url: Option<String>,
        tech_stack: Vec<String>,
        extra_urls: Vec<String>,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            user_id,
            name,
            description,
            status,
            project_type,
            production_url,
            repository_url,
            tech_stack,
            extra_urls,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a project from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ProjectId,
        user_id: UserId,
        name: String,
        description: String,
        status: ProjectStatus,
        project_type: ProjectType,
        production_url: Option<String>,
        repository_url: Option<String>,
        tech_stack: Vec<String>,
        extra_urls: Vec<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            description,
            status,
            project_type,
            production_url,
            repository_url,
            tech_stack,
            extra_urls,
            created_at,
            updated_at,
        }
    }

    /// Applies an update, touching `updated_at`.
    pub fn update(&mut self, changes: ProjectChanges) -> Result<(), DomainError> {
        if let Some(name) = changes.name {
            Self::validate_name(&name)?;
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(project_type) = changes.project_type {
            self.project_type = project_type;
        }
        if let Some(url) = changes.production_url {
            self.production_url = url;
        }
        if let Some(url) = changes.repository_url {
            self.repository_url = url;
        }
        if let Some(stack) = changes.tech_stack {
            self.tech_stack = stack;
        }
        if let Some(urls) = changes.extra_urls {
            self.extra_urls = urls;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn production_url(&self) -> Option<&str> {
        self.production_url.as_deref()
    }

    pub fn repository_url(&self) -> Option<&str> {
        self.repository_url.as_deref()
    }

    pub fn tech_stack(&self) -> &[String] {
        &self.tech_stack
    }

    pub fn extra_urls(&self) -> &[String] {
        &self.extra_urls
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(ValidationError::too_long("name", MAX_NAME_LENGTH, name.len()).into());
        }
        Ok(())
    }
}
