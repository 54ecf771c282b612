//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Declares a UUID-backed identifier newtype.
macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

/// Declares a sequence-backed (i64) identifier newtype.
///
/// Roadmaps, phases and items use database sequences rather than UUIDs.
macro_rules! serial_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from a raw database value.
            pub fn from_raw(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw value.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a software project.
    ProjectId
);

uuid_id!(
    /// Unique identifier for a captured idea.
    IdeaId
);

uuid_id!(
    /// Unique identifier for an AI conversation.
    ConversationId
);

uuid_id!(
    /// Unique identifier for a conversation message.
    MessageId
);

uuid_id!(
    /// Unique identifier for a user (issued by the hosted auth provider).
    UserId
);

serial_id!(
    /// Unique identifier for a learning roadmap.
    RoadmapId
);

serial_id!(
    /// Unique identifier for a roadmap phase.
    PhaseId
);

serial_id!(
    /// Unique identifier for a roadmap item.
    ItemId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_id_roundtrips_through_string() {
        let id = ProjectId::new();
        let parsed: ProjectId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn project_id_rejects_invalid_uuid() {
        assert!("not-a-uuid".parse::<ProjectId>().is_err());
    }

    #[test]
    fn roadmap_id_exposes_raw_value() {
        let id = RoadmapId::from_raw(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn serde_is_transparent() {
        let id = RoadmapId::from_raw(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let user = UserId::new();
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            format!("\"{}\"", user)
        );
    }
}
