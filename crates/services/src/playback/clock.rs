use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug)]
struct Pending<T> {
    due_at: Instant,
    cue: T,
}

/// Single-slot deferred continuation.
///
/// Scheduling always replaces whatever was pending, so at most one cue is
/// outstanding per clock. A cue only runs when `fire_due` hands it out; once
/// cancelled or replaced it can never be returned.
#[derive(Debug)]
pub struct PlaybackClock<T> {
    pending: Option<Pending<T>>,
}

impl<T> Default for PlaybackClock<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> PlaybackClock<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending cue, then arms `cue` to become due `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, cue: T) {
        self.pending = Some(Pending {
            due_at: now + delay,
            cue,
        });
    }

    /// Drops the pending cue, if any. Returns whether something was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn due_at(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due_at)
    }

    /// Takes the pending cue if its deadline is at or before `now`.
    ///
    /// Returns the deadline alongside the cue so follow-up work can be
    /// scheduled from when the cue was due rather than when it was noticed.
    pub fn fire_due(&mut self, now: Instant) -> Option<(Instant, T)> {
        match &self.pending {
            Some(pending) if pending.due_at <= now => {
                self.pending.take().map(|p| (p.due_at, p.cue))
            }
            _ => None,
        }
    }
}
