//! Requirements document use cases.

mod apply_suggestion;
mod export_document;
mod load_document;
mod save_document;

pub use apply_suggestion::{ApplySuggestionCommand, ApplySuggestionHandler, ApplySuggestionResult};
pub use export_document::{ExportDocumentHandler, ExportedDocument};
pub use load_document::{LoadDocumentHandler, LoadedDocument};
pub use save_document::SaveDocumentHandler;
