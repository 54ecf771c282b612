//! Adapters - Implementations of the ports.
//!
//! - `ai` - OpenRouter chat provider (SSE streaming) and a mock for tests
//! - `storage` - Supabase object storage, local filesystem, and in-memory
//!   document stores
//! - `postgres` - sqlx repositories for the entities
//! - `memory` - in-memory repositories for tests and local development
//! - `http` - axum routes, handlers and DTOs

pub mod ai;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod storage;
