//! Use case handlers, grouped by module.

pub mod chat;
pub mod conversation;
pub mod document;
pub mod idea;
pub mod project;
pub mod roadmap;
