use chrono::{DateTime, Duration, Utc};
use std::fmt;

use drill_core::SentencePool;
use drill_core::model::{PhaseState, Scope, SentencePair};

use super::clock::PlaybackClock;

/// Continuations the sequencer schedules on the session clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// The current phase has been on screen for its full duration.
    PhaseElapsed,
    /// The gap after a finished pair is over; show the next prompt.
    NextItem,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Mutable state of one drill session.
///
/// Owned by `SessionController`; only `PhaseSequencer` mutates it. The timer is
/// pending only while the session is active, unpaused, and waiting on a transition.
pub struct PlaybackSession {
    pub(crate) scope: Scope,
    pub(crate) phase: PhaseState,
    pub(crate) pool: SentencePool,
    pub(crate) is_paused: bool,
    pub(crate) is_active: bool,
    pub(crate) items_completed: u64,
    pub(crate) timer: PlaybackClock<Cue>,
    pub(crate) started_at: DateTime<Utc>,
}

impl PlaybackSession {
    #[must_use]
    pub fn new(scope: Scope, pool: SentencePool, started_at: DateTime<Utc>) -> Self {
        Self {
            scope,
            phase: PhaseState::Prompt,
            pool,
            is_paused: false,
            is_active: true,
            items_completed: 0,
            timer: PlaybackClock::new(),
            started_at,
        }
    }

    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    #[must_use]
    pub fn phase(&self) -> PhaseState {
        self.phase
    }

    #[must_use]
    pub fn current_pair(&self) -> &SentencePair {
        self.pool.current()
    }

    #[must_use]
    pub fn pool(&self) -> &SentencePool {
        &self.pool
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub fn items_completed(&self) -> u64 {
        self.items_completed
    }

    #[must_use]
    pub fn timer(&self) -> &PlaybackClock<Cue> {
        &self.timer
    }

    #[must_use]
    pub fn summary(&self, stopped_at: DateTime<Utc>) -> SessionSummary {
        SessionSummary {
            scope: self.scope.clone(),
            items_completed: self.items_completed,
            cycles_completed: self.pool.cycles_completed(),
            started_at: self.started_at,
            stopped_at,
        }
    }
}

impl fmt::Debug for PlaybackSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("scope", &self.scope)
            .field("phase", &self.phase)
            .field("pool", &self.pool)
            .field("is_paused", &self.is_paused)
            .field("is_active", &self.is_active)
            .field("items_completed", &self.items_completed)
            .field("timer_pending", &self.timer.is_pending())
            .finish_non_exhaustive()
    }
}

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

/// What a stopped session accomplished. Reported, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub scope: Scope,
    pub items_completed: u64,
    pub cycles_completed: u64,
    pub started_at: DateTime<Utc>,
    pub stopped_at: DateTime<Utc>,
}

impl SessionSummary {
    #[must_use]
    pub fn duration(&self) -> Duration {
        (self.stopped_at - self.started_at).max(Duration::zero())
    }
}
