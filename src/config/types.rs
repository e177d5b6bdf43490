// Suggestion engine configuration type definitions

use serde::Deserialize;

/// Default base URL for the suggestion service
fn default_base_url() -> String {
    "https://api.lekhini.app".to_string()
}

/// Default request timeout in seconds (connect + read + write)
fn default_timeout_secs() -> u64 {
    10
}

/// Default number of suggestions requested per call
fn default_count() -> u32 {
    3
}

/// Default fallback setting: local generation works out of the box, remote
/// use is opt-in once a credential is configured
fn default_use_local_fallback() -> bool {
    true
}

/// Remote suggestion service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the suggestion service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer-token credential (required for remote use)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Bounded timeout applied to each request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Suggestions requested per call
    #[serde(default = "default_count")]
    pub count: u32,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            count: default_count(),
        }
    }
}

/// Top-level suggestion engine configuration
///
/// Hosts re-apply this via `SuggestionOrchestrator::set_config` whenever the
/// user's preferences change; in-flight requests are unaffected.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestConfig {
    /// Use the local fallback generator instead of the remote service
    #[serde(default = "default_use_local_fallback")]
    pub use_local_fallback: bool,
    /// Remote service settings
    #[serde(default)]
    pub remote: RemoteConfig,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            use_local_fallback: default_use_local_fallback(),
            remote: RemoteConfig::default(),
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
