//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `document` - The requirements-document patch protocol (classifier,
//!   applier, edit history, editor session, template)
//! - `project` - Software project entity and lifecycle enums
//! - `idea` - Captured idea entity
//! - `roadmap` - Learning roadmap aggregate (phases, items, progress)
//! - `conversation` - AI conversation and message entities

pub mod conversation;
pub mod document;
pub mod foundation;
pub mod idea;
pub mod project;
pub mod roadmap;
