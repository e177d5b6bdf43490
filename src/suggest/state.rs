//! Push-updated UI state
//!
//! The orchestrator is the sole writer; the keyboard UI observes the loading
//! flag, the current suggestion list, and the visibility flag through watch
//! receivers. Watchers only ever see a loading state, a populated list, or an
//! empty list — never an error.

use tokio::sync::watch;

/// Read side of the UI state, handed to the keyboard UI.
#[derive(Debug, Clone)]
pub struct UiWatchers {
    /// True while a generation request is in flight
    pub loading: watch::Receiver<bool>,
    /// Most recently delivered suggestion list
    pub suggestions: watch::Receiver<Vec<String>>,
    /// True when the suggestion strip should be shown (non-empty list)
    pub suggestions_visible: watch::Receiver<bool>,
}

/// Write side, owned by the orchestrator.
#[derive(Debug)]
pub(crate) struct UiPublisher {
    loading_tx: watch::Sender<bool>,
    suggestions_tx: watch::Sender<Vec<String>>,
    visible_tx: watch::Sender<bool>,
}

impl UiPublisher {
    pub fn new() -> Self {
        let (loading_tx, _) = watch::channel(false);
        let (suggestions_tx, _) = watch::channel(Vec::new());
        let (visible_tx, _) = watch::channel(false);
        Self {
            loading_tx,
            suggestions_tx,
            visible_tx,
        }
    }

    /// Create a new set of receivers for a UI observer.
    pub fn watchers(&self) -> UiWatchers {
        UiWatchers {
            loading: self.loading_tx.subscribe(),
            suggestions: self.suggestions_tx.subscribe(),
            suggestions_visible: self.visible_tx.subscribe(),
        }
    }

    pub fn set_loading(&self, loading: bool) {
        self.loading_tx.send_replace(loading);
    }

    /// Publish a delivered suggestion list; visibility tracks non-emptiness.
    pub fn publish(&self, suggestions: Vec<String>) {
        let visible = !suggestions.is_empty();
        self.suggestions_tx.send_replace(suggestions);
        self.visible_tx.send_replace(visible);
    }

    /// Empty the published list and hide the strip.
    pub fn clear(&self) {
        self.publish(Vec::new());
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
