//! Application layer - use case handlers.
//!
//! Each handler wires domain logic to the ports it needs. HTTP adapters
//! construct commands/queries and delegate here.

pub mod handlers;
