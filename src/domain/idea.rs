//! Idea entity - a captured project idea awaiting refinement.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, IdeaId, Timestamp, UserId, ValidationError};

/// Maximum length for an idea title.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Maximum length for an idea description.
pub const MAX_DESCRIPTION_LENGTH: usize = 5000;

/// A captured idea.
///
/// # Invariants
///
/// - `title` is 1-255 characters
/// - `description` is 1-5000 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    id: IdeaId,
    user_id: UserId,
    title: String,
    description: String,
    created_at: Timestamp,
}

impl Idea {
    /// Creates a new idea.
    pub fn new(
        id: IdeaId,
        user_id: UserId,
        title: String,
        description: String,
    ) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;
        Self::validate_description(&description)?;

        Ok(Self {
            id,
            user_id,
            title,
            description,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstitutes an idea from persistence (no validation).
    pub fn reconstitute(
        id: IdeaId,
        user_id: UserId,
        title: String,
        description: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            description,
            created_at,
        }
    }

    /// Updates title and/or description.
    pub fn update(
        &mut self,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<(), DomainError> {
        if let Some(title) = title {
            Self::validate_title(&title)?;
            self.title = title;
        }
        if let Some(description) = description {
            Self::validate_description(&description)?;
            self.description = description;
        }
        Ok(())
    }

    pub fn id(&self) -> IdeaId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    fn validate_title(title: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title").into());
        }
        if title.len() > MAX_TITLE_LENGTH {
            return Err(ValidationError::too_long("title", MAX_TITLE_LENGTH, title.len()).into());
        }
        Ok(())
    }

    fn validate_description(description: &str) -> Result<(), DomainError> {
        if description.trim().is_empty() {
            return Err(ValidationError::empty_field("description").into());
        }
        if description.len() > MAX_DESCRIPTION_LENGTH {
            return Err(ValidationError::too_long(
                "description",
                MAX_DESCRIPTION_LENGTH,
                description.len(),
            )
            .into());
        }
        Ok(())
    }
}
