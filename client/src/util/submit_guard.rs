//! Lifetime guard for in-flight form submissions.
//!
//! A page creates one guard, takes a ticket per submission, and cancels the
//! guard in `on_cleanup`. A completion only applies if its ticket is still
//! the latest one and the page is still mounted.

#[cfg(test)]
#[path = "submit_guard_test.rs"]
mod submit_guard_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[derive(Clone, Debug, Default)]
pub struct SubmitGuard {
    generation: Arc<AtomicU64>,
    cancelled: Arc<AtomicBool>,
}

/// Identifies one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTicket(u64);

impl SubmitGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submission, superseding any earlier ticket.
    pub fn begin(&self) -> SubmitTicket {
        SubmitTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Tear down: every outstanding ticket becomes stale.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Whether a completion for `ticket` may still touch shared state.
    #[must_use]
    pub fn is_current(&self, ticket: SubmitTicket) -> bool {
        !self.is_cancelled() && self.generation.load(Ordering::SeqCst) == ticket.0
    }
}
