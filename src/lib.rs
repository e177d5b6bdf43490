//! lekhini — suggestion engine core for a Telugu software keyboard
//!
//! Given in-progress user text, this crate detects the language/dialect being
//! typed (English, Telugu script, or romanized Telugu), fetches short reply
//! or rewrite suggestions from a remote service (or a deterministic local
//! fallback), caches results, and guarantees that only the most recent
//! request's result is ever delivered to the UI.
//!
//! Rendering, gesture handling, and settings persistence belong to the host
//! keyboard app; this crate only exposes the orchestrator and its observable
//! UI state.

pub mod config;
pub mod suggest;

// Re-export commonly used types for convenience
pub use config::SuggestConfig;
pub use suggest::{LanguageMode, SuggestionKind, SuggestionOrchestrator, Tone, UiWatchers};
