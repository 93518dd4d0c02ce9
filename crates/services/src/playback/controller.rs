use std::sync::Arc;

use log::{debug, info};
use tokio::time::Instant;

use drill_core::model::{Catalog, PhaseState, PhaseTimings, Scope, SentencePair};
use drill_core::{Clock, SentencePool};

use super::input::{InputEvent, SessionAction};
use super::sequencer::PhaseSequencer;
use super::session::{PlaybackSession, SessionSummary};
use crate::error::SessionError;
use crate::presenter::{PlaybackStatus, Presenter};

/// Entry point for the input layer.
///
/// Owns the current `PlaybackSession` (if any) and routes every mutation of it
/// through `PhaseSequencer`. Timer cues are delivered by calling `tick`.
pub struct SessionController<P> {
    catalog: Arc<Catalog>,
    sequencer: PhaseSequencer,
    presenter: P,
    clock: Clock,
    seed: Option<u64>,
    session: Option<PlaybackSession>,
}

impl<P: Presenter> SessionController<P> {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, timings: PhaseTimings, presenter: P) -> Self {
        Self {
            catalog,
            sequencer: PhaseSequencer::new(timings),
            presenter,
            clock: Clock::default(),
            seed: None,
            session: None,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Use a fixed seed for every pool this controller builds.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Start drilling `scope`, replacing any running session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Scope` if the scope is unknown or empty. In that case
    /// the current session, if any, keeps running untouched.
    pub fn start_session(&mut self, scope: Scope) -> Result<(), SessionError> {
        let pool = match self.seed {
            Some(seed) => SentencePool::with_seed(&self.catalog, &scope, seed)?,
            None => SentencePool::new(&self.catalog, &scope)?,
        };

        if self.session.is_some() {
            self.stop();
        }

        info!("starting session for `{scope}` with {} sentences", pool.len());
        let mut session = PlaybackSession::new(scope, pool, self.clock.now());
        self.presenter.status(PlaybackStatus::Playing);
        self.presenter.progress(0);
        self.sequencer
            .enter_phase(&mut session, Instant::now(), &mut self.presenter);
        self.session = Some(session);
        Ok(())
    }

    pub fn toggle_pause_resume(&mut self) {
        if self.is_paused() {
            self.resume();
        } else {
            self.pause();
        }
    }

    pub fn pause(&mut self) {
        if let Some(session) = self.session.as_mut() {
            self.sequencer.pause(session, &mut self.presenter);
        }
    }

    pub fn resume(&mut self) {
        if let Some(session) = self.session.as_mut() {
            self.sequencer
                .resume(session, Instant::now(), &mut self.presenter);
        }
    }

    pub fn skip(&mut self) {
        if let Some(session) = self.session.as_mut() {
            self.sequencer
                .skip(session, Instant::now(), &mut self.presenter);
        }
    }

    /// Stop the session and return to the start screen.
    ///
    /// Returns what the session accomplished, or `None` if nothing was running.
    pub fn stop(&mut self) -> Option<SessionSummary> {
        let mut session = self.session.take()?;
        self.sequencer.stop(&mut session);
        self.presenter.reset();
        self.presenter.status(PlaybackStatus::Idle);

        let summary = session.summary(self.clock.now());
        info!(
            "session for `{}` stopped after {} sentences ({} full cycles)",
            summary.scope, summary.items_completed, summary.cycles_completed
        );
        Some(summary)
    }

    /// The output is no longer observed; hold playback so progress stays in sync.
    pub fn visibility_lost(&mut self) {
        if self.is_active() && !self.is_paused() {
            debug!("visibility lost, pausing");
            self.pause();
        }
    }

    /// Apply a raw input event. Ignored while no session is running.
    pub fn handle_input(&mut self, event: InputEvent) {
        if !self.is_active() {
            debug!("ignoring {event:?} with no active session");
            return;
        }
        match event.action() {
            Some(SessionAction::TogglePause) => self.toggle_pause_resume(),
            Some(SessionAction::Skip) => self.skip(),
            Some(SessionAction::Stop) => {
                self.stop();
            }
            Some(SessionAction::Pause) => self.visibility_lost(),
            None => {}
        }
    }

    /// Deliver every cue whose deadline has passed.
    ///
    /// Each follow-up phase is timed from the deadline of the cue that
    /// triggered it, so a late tick does not push the schedule back.
    pub fn tick(&mut self) {
        let now = Instant::now();
        if let Some(session) = self.session.as_mut() {
            while let Some((due_at, cue)) = session.timer.fire_due(now) {
                self.sequencer
                    .on_cue(session, cue, due_at, &mut self.presenter);
            }
        }
    }

    /// When the next cue becomes due, if one is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.session.as_ref().and_then(|s| s.timer.due_at())
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.as_ref().is_some_and(PlaybackSession::is_active)
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.session.as_ref().is_some_and(PlaybackSession::is_paused)
    }

    #[must_use]
    pub fn phase(&self) -> Option<PhaseState> {
        self.session.as_ref().map(PlaybackSession::phase)
    }

    #[must_use]
    pub fn items_completed(&self) -> u64 {
        self.session
            .as_ref()
            .map_or(0, PlaybackSession::items_completed)
    }

    #[must_use]
    pub fn current_pair(&self) -> Option<&SentencePair> {
        self.session.as_ref().map(PlaybackSession::current_pair)
    }

    #[must_use]
    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }
}
