//! Storage adapters - implementations of the DocumentStore port.

mod in_memory_store;
mod local_store;
mod supabase_store;

pub use in_memory_store::InMemoryDocumentStore;
pub use local_store::LocalDocumentStore;
pub use supabase_store::{SupabaseConfig, SupabaseDocumentStore};
