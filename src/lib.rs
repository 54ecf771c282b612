//! DevPlanKit - Project and Idea Management Backend
//!
//! This crate implements the DevPlanKit backend: project, idea and learning
//! roadmap tracking, AI conversations, and the AI-assisted requirements
//! document editor with its patch-and-merge protocol.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
