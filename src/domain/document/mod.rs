//! Requirements-document patch protocol.
//!
//! The requirements editor converses with an LLM that may answer with a
//! structured edit embedded in a fenced JSON block. This module contains the
//! pure logic for that protocol:
//!
//! - `edit` - The structured edit descriptor (wire format)
//! - `classifier` - Decides whether raw assistant text carries an edit
//! - `applier` - Deterministically applies a validated edit to a document
//! - `history` - Linear undo buffer over document snapshots
//! - `session` - Editor session aggregate with the Clean/Dirty/Saving machine
//! - `template` - Initial document template and export filename derivation
//!
//! Everything here is synchronous and free of I/O. The classifier never
//! mutates a document; only the applier produces new document strings.

mod applier;
mod classifier;
mod edit;
mod history;
mod session;
mod template;

pub use applier::apply;
pub use classifier::{extract_explanation, parse_ai_response, ParsedResponse};
pub use edit::DocumentEdit;
pub use history::EditHistory;
pub use session::{EditorSession, SaveState};
pub use template::{export_filename, initial_template};
