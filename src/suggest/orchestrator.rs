//! Suggestion orchestrator
//!
//! Composes the language-aware caches, the request sequencer, the remote
//! client, and the local fallback generator. Hosts construct one orchestrator
//! per keyboard session and call `generate_replies` / `generate_rewrites`
//! from the input pipeline; results arrive through the UI watchers and the
//! per-call callback, and only the latest request's result is ever delivered.
//!
//! Failure policy: every remote failure (server error, network, timeout,
//! parse) is converted into local fallback suggestions. The only silent
//! outcome is a request superseded or cancelled before delivery.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::config::SuggestConfig;

use super::cache::{SuggestionCache, cache_key};
use super::fallback;
use super::language::LanguageMode;
use super::remote::{
    HttpSuggestionClient, RemoteError, ReplyRequest, RewriteRequest, SuggestionClient,
};
use super::sequencer::RequestSequencer;
use super::state::{UiPublisher, UiWatchers};
use super::types::{SuggestionKind, Tone};

/// Callback invoked with the delivered suggestion list.
///
/// Fires exactly once for a request that is neither superseded nor cancelled,
/// and never fires otherwise.
type ResultCallback = Box<dyn FnOnce(Vec<String>) + Send + 'static>;

struct Inner {
    config: RwLock<SuggestConfig>,
    client: SuggestionClient,
    reply_cache: SuggestionCache,
    rewrite_cache: SuggestionCache,
    sequencer: RequestSequencer,
    ui: UiPublisher,
    runtime: Handle,
}

impl Inner {
    fn cache_for(&self, kind: SuggestionKind) -> &SuggestionCache {
        match kind {
            SuggestionKind::Reply => &self.reply_cache,
            SuggestionKind::Rewrite => &self.rewrite_cache,
        }
    }

    /// The single suspension point: remote fetch or (logically async) local
    /// generation, raced against the cancellation token.
    async fn fetch(
        &self,
        kind: SuggestionKind,
        text: &str,
        mode: LanguageMode,
        tone: Tone,
        config: &SuggestConfig,
        token: &CancellationToken,
    ) -> Result<Vec<String>, RemoteError> {
        if config.use_local_fallback {
            if token.is_cancelled() {
                return Err(RemoteError::Cancelled);
            }
            return Ok(local_suggestions(kind, text, mode, tone));
        }

        match kind {
            SuggestionKind::Reply => {
                let request = ReplyRequest {
                    context: text.to_string(),
                    tone: tone.api_token().to_string(),
                    language_mode: mode.api_token().to_string(),
                    count: config.remote.count,
                };
                self.client
                    .fetch_replies(&request, &config.remote, token)
                    .await
            }
            SuggestionKind::Rewrite => {
                let request = RewriteRequest {
                    text: text.to_string(),
                    tone: tone.api_token().to_string(),
                    language_mode: mode.api_token().to_string(),
                    count: config.remote.count,
                };
                self.client
                    .fetch_rewrites(&request, &config.remote, token)
                    .await
            }
        }
    }
}

fn local_suggestions(
    kind: SuggestionKind,
    text: &str,
    mode: LanguageMode,
    tone: Tone,
) -> Vec<String> {
    match kind {
        SuggestionKind::Reply => fallback::replies(mode, tone),
        SuggestionKind::Rewrite => fallback::rewrites(text, mode, tone),
    }
}

/// Orchestrates suggestion generation for one keyboard session.
///
/// Owns the two caches and the sequencer exclusively; cloning is cheap and
/// clones share the same state.
#[derive(Clone)]
pub struct SuggestionOrchestrator {
    inner: Arc<Inner>,
}

impl SuggestionOrchestrator {
    /// Create an orchestrator dispatching async work onto `runtime`.
    pub fn new(config: SuggestConfig, runtime: Handle) -> Self {
        Self::with_client(config, runtime, SuggestionClient::Http(HttpSuggestionClient::new()))
    }

    pub(crate) fn with_client(
        config: SuggestConfig,
        runtime: Handle,
        client: SuggestionClient,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                config: RwLock::new(config),
                client,
                reply_cache: SuggestionCache::new(),
                rewrite_cache: SuggestionCache::new(),
                sequencer: RequestSequencer::new(),
                ui: UiPublisher::new(),
                runtime,
            }),
        }
    }

    /// Subscribe to the push-updated UI state.
    pub fn watchers(&self) -> UiWatchers {
        self.inner.ui.watchers()
    }

    /// Apply new settings; affects subsequent generate calls only.
    pub fn set_config(&self, config: SuggestConfig) {
        *self.inner.config.write() = config;
    }

    /// Generate short reply suggestions for the conversation context.
    pub fn generate_replies(
        &self,
        text: &str,
        mode: LanguageMode,
        tone: Tone,
        on_result: impl FnOnce(Vec<String>) + Send + 'static,
    ) {
        self.generate(SuggestionKind::Reply, text, mode, tone, Box::new(on_result));
    }

    /// Generate rewrites of the user's in-progress text.
    pub fn generate_rewrites(
        &self,
        text: &str,
        mode: LanguageMode,
        tone: Tone,
        on_result: impl FnOnce(Vec<String>) + Send + 'static,
    ) {
        self.generate(SuggestionKind::Rewrite, text, mode, tone, Box::new(on_result));
    }

    /// Cancel the in-flight request, if any, and clear the loading flag.
    ///
    /// Already-delivered suggestions stay published. Safe to call redundantly.
    pub fn cancel_current_request(&self) {
        self.inner.sequencer.cancel_current();
        self.inner.ui.set_loading(false);
    }

    /// Drop all cached suggestions and empty the published list
    /// (privacy/testing hook).
    pub fn clear_all(&self) {
        self.inner.reply_cache.invalidate_all();
        self.inner.rewrite_cache.invalidate_all();
        self.inner.ui.clear();
    }

    fn generate(
        &self,
        kind: SuggestionKind,
        text: &str,
        mode: LanguageMode,
        tone: Tone,
        on_result: ResultCallback,
    ) {
        let inner = &self.inner;

        // A new request always supersedes whatever is in flight
        inner.sequencer.cancel_current();

        let key = cache_key(kind, text, mode, tone);
        if let Some(hit) = inner.cache_for(kind).get(&key) {
            log::debug!("{} cache hit, delivering synchronously", kind.tag());
            // Same side-effect sequence as the async path, loading pulsed off
            inner.ui.set_loading(true);
            inner.ui.publish(hit.clone());
            inner.ui.set_loading(false);
            on_result(hit);
            return;
        }

        let (request_id, token) = inner.sequencer.issue();
        inner.ui.set_loading(true);
        let config = inner.config.read().clone();
        let text = text.to_string();
        let task_inner = Arc::clone(inner);

        log::debug!("dispatching {} request {request_id}", kind.tag());
        inner.runtime.spawn(async move {
            let outcome = task_inner
                .fetch(kind, &text, mode, tone, &config, &token)
                .await;

            let suggestions = match outcome {
                Ok(list) if !list.is_empty() => list,
                Ok(_) => {
                    log::debug!("request {request_id} returned no suggestions, using fallback");
                    local_suggestions(kind, &text, mode, tone)
                }
                Err(RemoteError::Cancelled) => {
                    log::debug!("request {request_id} cancelled");
                    return;
                }
                Err(e) => {
                    log::debug!("request {request_id} failed ({e}), using fallback");
                    local_suggestions(kind, &text, mode, tone)
                }
            };

            // Latest-wins: stale or cancelled results are dropped with no
            // side effects at all
            if !task_inner.sequencer.finish_if_current(request_id, &token) {
                log::debug!("request {request_id} superseded, dropping result");
                return;
            }

            task_inner.cache_for(kind).put(key, suggestions.clone());
            task_inner.ui.publish(suggestions.clone());
            task_inner.ui.set_loading(false);
            on_result(suggestions);
        });
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod orchestrator_tests;
