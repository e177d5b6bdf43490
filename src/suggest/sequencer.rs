//! Request sequencing and stale-result suppression
//!
//! Each generation request gets a monotonically increasing id and a fresh
//! [`CancellationToken`]; issuing a new request cancels the previous token.
//! A completed request may only deliver if its id is still the latest *and*
//! its token was never cancelled — both checked under the same lock that
//! issues ids, so two overlapping requests can never both be judged latest.
//!
//! The critical section is update-only: it never performs I/O or awaits.

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

struct SequencerInner {
    last_issued: u64,
    in_flight: Option<CancellationToken>,
}

/// Monotonic counter plus the in-flight cancellation token.
pub struct RequestSequencer {
    inner: Mutex<SequencerInner>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SequencerInner {
                last_issued: 0,
                in_flight: None,
            }),
        }
    }

    /// Issue a new request id, cancelling any previous in-flight job.
    ///
    /// Returns the id and the token the new job must observe.
    pub fn issue(&self) -> (u64, CancellationToken) {
        let mut inner = self.inner.lock();
        if let Some(token) = inner.in_flight.take() {
            token.cancel();
        }
        inner.last_issued += 1;
        let token = CancellationToken::new();
        inner.in_flight = Some(token.clone());
        (inner.last_issued, token)
    }

    /// Best-effort cancel of the in-flight job.
    ///
    /// Safe to call when nothing is in flight, and safe to call repeatedly.
    pub fn cancel_current(&self) {
        let mut inner = self.inner.lock();
        if let Some(token) = inner.in_flight.take() {
            token.cancel();
        }
    }

    /// Atomically decide whether the job issued as `id` may deliver.
    ///
    /// Returns true (and clears the in-flight slot) only if `id` is still the
    /// latest issued id and `token` was not cancelled; a newer `issue` or a
    /// `cancel_current` that happened first makes this return false.
    pub fn finish_if_current(&self, id: u64, token: &CancellationToken) -> bool {
        let mut inner = self.inner.lock();
        if inner.last_issued == id && !token.is_cancelled() {
            inner.in_flight = None;
            true
        } else {
            false
        }
    }
}

impl Default for RequestSequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "sequencer_tests.rs"]
mod sequencer_tests;
