// Configuration module for the suggestion engine
//
// Persistent settings storage belongs to the host keyboard app; this module
// only defines the config shape and parses TOML text the host hands us.

mod types;

pub use types::{RemoteConfig, SuggestConfig};

/// Parse a TOML config document.
///
/// Missing fields and sections fall back to defaults; the host decides how to
/// report a parse error (the engine itself never sees invalid config).
pub fn parse_config(contents: &str) -> Result<SuggestConfig, toml::de::Error> {
    toml::from_str(contents)
}
