//! Suggestion engine module
//!
//! Language detection, caching, request sequencing, and orchestration for
//! reply and rewrite suggestions. The orchestrator is the entry point; the
//! submodules are exposed for hosts that need the pieces directly (language
//! detection runs on every keystroke, independent of generation).

pub mod cache;
pub mod fallback;
pub mod language;
pub mod orchestrator;
mod remote;
pub mod sequencer;
pub mod state;
pub mod types;

pub use language::LanguageMode;
pub use orchestrator::SuggestionOrchestrator;
pub use state::UiWatchers;
pub use types::{SuggestionKind, Tone};
