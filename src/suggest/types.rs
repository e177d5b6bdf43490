//! Shared suggestion types
//!
//! Small enums used across the cache, fallback generator, and remote client.
//! Wire tokens are fixed lowercase strings matching the service API.

/// The two independent generation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionKind {
    /// Short reply to the current conversation context
    Reply,
    /// Rewrite of the user's in-progress text
    Rewrite,
}

impl SuggestionKind {
    /// Cache-key prefix tag for this kind
    pub fn tag(&self) -> &'static str {
        match self {
            SuggestionKind::Reply => "reply",
            SuggestionKind::Rewrite => "rewrite",
        }
    }
}

/// Stylistic register requested for generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Casual,
    Friendly,
    Professional,
}

impl Tone {
    /// All tones, in a fixed order (used by tests and hosts building pickers)
    pub const ALL: [Tone; 3] = [Tone::Casual, Tone::Friendly, Tone::Professional];

    /// Token sent to the suggestion service
    pub fn api_token(&self) -> &'static str {
        match self {
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Professional => "professional",
        }
    }
}
