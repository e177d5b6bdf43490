//! Suggestion cache
//!
//! Fixed-capacity, time-expiring store for generated suggestion lists. One
//! instance exists per suggestion kind (reply, rewrite), both owned by the
//! orchestrator. Eviction is access-based LRU: `get` promotes the entry, so
//! repeatedly read entries survive overflow. Expired entries are removed on
//! read rather than swept in the background.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;
use sha2::{Digest, Sha256};

use super::language::LanguageMode;
use super::types::{SuggestionKind, Tone};

/// Default number of entries held per cache instance
pub const DEFAULT_CAPACITY: usize = 50;

/// Default time-to-live for a cache entry
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

struct CacheEntry {
    suggestions: Vec<String>,
    inserted_at: Instant,
}

/// LRU + TTL cache mapping request keys to suggestion lists.
pub struct SuggestionCache {
    inner: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl SuggestionCache {
    /// Create a cache with the default capacity (50) and TTL (5 minutes).
    pub fn new() -> Self {
        Self::with_policy(DEFAULT_CAPACITY, DEFAULT_TTL)
    }

    /// Create a cache with an explicit capacity and TTL.
    pub fn with_policy(capacity: usize, ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity).expect("cache capacity must be > 0"),
            )),
            ttl,
        }
    }

    /// Look up a suggestion list. Returns `None` if the key was never
    /// inserted, was evicted, or its TTL has elapsed.
    pub fn get(&self, key: &str) -> Option<Vec<String>> {
        let mut cache = self.inner.lock();
        if let Some(entry) = cache.get(key) {
            if entry.inserted_at.elapsed() < self.ttl {
                return Some(entry.suggestions.clone());
            }
            // Expired, remove it
            cache.pop(key);
        }
        None
    }

    /// Insert a suggestion list. Overwriting an existing key resets both the
    /// value and the insertion timestamp.
    pub fn put(&self, key: String, suggestions: Vec<String>) {
        let mut cache = self.inner.lock();
        cache.put(
            key,
            CacheEntry {
                suggestions,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Drop every entry (privacy/testing hook).
    pub fn invalidate_all(&self) {
        self.inner.lock().clear();
    }
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the cache key for a generation request.
///
/// SHA-256 over the normalized text (trimmed, lowercased) and the mode/tone
/// API tokens, hex-encoded and prefixed with the kind tag. The kind prefix is
/// redundant while reply and rewrite use separate cache instances but keeps
/// keys unambiguous if the instances are ever merged.
pub fn cache_key(kind: SuggestionKind, text: &str, mode: LanguageMode, tone: Tone) -> String {
    let normalized = text.trim().to_lowercase();
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    hasher.update(b"|");
    hasher.update(mode.api_token().as_bytes());
    hasher.update(b"|");
    hasher.update(tone.api_token().as_bytes());
    format!("{}:{}", kind.tag(), hex::encode(hasher.finalize()))
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
