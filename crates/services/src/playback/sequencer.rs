use log::debug;
use tokio::time::Instant;

use drill_core::model::{PhaseFrame, PhaseState, PhaseTimings};

use super::session::{Cue, PlaybackSession};
use crate::presenter::{PlaybackStatus, Presenter};

/// Drives a `PlaybackSession` through `Prompt -> RevealFirst -> RevealSecond`
/// for each pair, forever, until the session is stopped.
///
/// Every operation runs to completion and leaves at most one cue pending on the
/// session clock. Pausing drops the pending cue; resuming restarts the current
/// phase with its full duration.
#[derive(Debug, Clone, Default)]
pub struct PhaseSequencer {
    timings: PhaseTimings,
}

impl PhaseSequencer {
    #[must_use]
    pub fn new(timings: PhaseTimings) -> Self {
        Self { timings }
    }

    #[must_use]
    pub fn timings(&self) -> &PhaseTimings {
        &self.timings
    }

    /// Shows the session's current phase and arms its timeout.
    ///
    /// Does nothing while the session is stopped or paused.
    pub fn enter_phase(
        &self,
        session: &mut PlaybackSession,
        now: Instant,
        presenter: &mut dyn Presenter,
    ) {
        if !session.is_active || session.is_paused {
            return;
        }

        let phase = session.phase;
        presenter.render(&PhaseFrame::new(phase, session.pool.current()));
        session
            .timer
            .schedule(now, self.timings.duration_of(phase), Cue::PhaseElapsed);
        debug!(
            "entered {phase:?} for pair {} of {}",
            session.pool.cursor() + 1,
            session.pool.len()
        );
    }

    /// Handles a cue handed out by the session clock.
    ///
    /// `due_at` is the cue's deadline; the next phase is timed from it.
    pub fn on_cue(
        &self,
        session: &mut PlaybackSession,
        cue: Cue,
        due_at: Instant,
        presenter: &mut dyn Presenter,
    ) {
        if !session.is_active || session.is_paused {
            return;
        }

        match cue {
            Cue::PhaseElapsed => match session.phase.next() {
                Some(next) => {
                    session.phase = next;
                    self.enter_phase(session, due_at, presenter);
                }
                None => {
                    self.complete_item(session, presenter);
                    self.queue_next_item(session, due_at, presenter);
                }
            },
            Cue::NextItem => self.enter_phase(session, due_at, presenter),
        }
    }

    pub fn pause(&self, session: &mut PlaybackSession, presenter: &mut dyn Presenter) {
        if !session.is_active || session.is_paused {
            return;
        }
        session.is_paused = true;
        session.timer.cancel();
        presenter.status(PlaybackStatus::Paused);
        debug!("paused during {:?}", session.phase);
    }

    /// Unpauses and re-enters the phase that was showing, from the beginning.
    pub fn resume(
        &self,
        session: &mut PlaybackSession,
        now: Instant,
        presenter: &mut dyn Presenter,
    ) {
        if !session.is_active || !session.is_paused {
            return;
        }
        session.is_paused = false;
        presenter.status(PlaybackStatus::Playing);
        self.enter_phase(session, now, presenter);
    }

    /// Finishes the current pair immediately, whatever phase it is in.
    ///
    /// While paused the pair still counts and the pool still advances, but the
    /// next prompt waits for `resume`.
    pub fn skip(&self, session: &mut PlaybackSession, now: Instant, presenter: &mut dyn Presenter) {
        if !session.is_active {
            return;
        }
        session.timer.cancel();
        self.complete_item(session, presenter);
        self.queue_next_item(session, now, presenter);
    }

    pub fn stop(&self, session: &mut PlaybackSession) {
        session.timer.cancel();
        session.is_active = false;
    }

    fn complete_item(&self, session: &mut PlaybackSession, presenter: &mut dyn Presenter) {
        session.items_completed += 1;
        if session.pool.advance() {
            debug!(
                "cycle {} finished, reshuffled {} pairs",
                session.pool.cycles_completed(),
                session.pool.len()
            );
        }
        session.phase = PhaseState::Prompt;
        presenter.progress(session.items_completed);
    }

    fn queue_next_item(
        &self,
        session: &mut PlaybackSession,
        now: Instant,
        presenter: &mut dyn Presenter,
    ) {
        if !session.is_active || session.is_paused {
            return;
        }
        if self.timings.advance_gap().is_zero() {
            self.enter_phase(session, now, presenter);
        } else {
            session
                .timer
                .schedule(now, self.timings.advance_gap(), Cue::NextItem);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::RecordingPresenter;
    use drill_core::SentencePool;
    use drill_core::model::{Catalog, Category, CategoryId, Scope, SentencePair};
    use drill_core::time::fixed_now;
    use std::time::Duration;

    fn build_session() -> PlaybackSession {
        let catalog = Catalog::new(vec![Category::new(
            CategoryId::new("x"),
            "X",
            vec![
                SentencePair::new("안녕", "Hello"),
                SentencePair::new("감사", "Thanks"),
            ],
        )])
        .unwrap();
        let pool = SentencePool::with_seed(&catalog, &Scope::All, 3).unwrap();
        PlaybackSession::new(Scope::All, pool, fixed_now())
    }

    #[test]
    fn enter_phase_is_noop_when_paused_or_stopped() {
        let sequencer = PhaseSequencer::default();
        let mut presenter = RecordingPresenter::new();
        let mut session = build_session();
        let now = Instant::now();

        session.is_paused = true;
        sequencer.enter_phase(&mut session, now, &mut presenter);
        assert!(presenter.frames.is_empty());
        assert!(!session.timer.is_pending());

        session.is_paused = false;
        sequencer.stop(&mut session);
        sequencer.enter_phase(&mut session, now, &mut presenter);
        assert!(presenter.frames.is_empty());
        assert!(!session.timer.is_pending());
    }

    #[test]
    fn phase_elapsed_walks_through_reveals_then_waits_for_gap() {
        let sequencer = PhaseSequencer::default();
        let mut presenter = RecordingPresenter::new();
        let mut session = build_session();
        let now = Instant::now();

        sequencer.enter_phase(&mut session, now, &mut presenter);
        sequencer.on_cue(&mut session, Cue::PhaseElapsed, now, &mut presenter);
        assert_eq!(session.phase, PhaseState::RevealFirst);
        sequencer.on_cue(&mut session, Cue::PhaseElapsed, now, &mut presenter);
        assert_eq!(session.phase, PhaseState::RevealSecond);

        sequencer.on_cue(&mut session, Cue::PhaseElapsed, now, &mut presenter);
        assert_eq!(session.phase, PhaseState::Prompt);
        assert_eq!(session.items_completed, 1);
        assert_eq!(presenter.frames.len(), 3);
        assert_eq!(
            session.timer.due_at(),
            Some(now + Duration::from_millis(500))
        );

        sequencer.on_cue(&mut session, Cue::NextItem, now, &mut presenter);
        assert_eq!(presenter.frames.len(), 4);
        assert_eq!(presenter.last_frame().unwrap().phase, PhaseState::Prompt);
    }

    #[test]
    fn zero_gap_enters_next_prompt_immediately() {
        let timings = PhaseTimings::new(3_000, 2_000, 3_000, 0).unwrap();
        let sequencer = PhaseSequencer::new(timings);
        let mut presenter = RecordingPresenter::new();
        let mut session = build_session();
        let now = Instant::now();

        sequencer.enter_phase(&mut session, now, &mut presenter);
        sequencer.skip(&mut session, now, &mut presenter);

        assert_eq!(presenter.frames.len(), 2);
        assert_eq!(
            session.timer.due_at(),
            Some(now + Duration::from_millis(3_000))
        );
    }

    #[test]
    fn skip_while_paused_advances_without_scheduling() {
        let sequencer = PhaseSequencer::default();
        let mut presenter = RecordingPresenter::new();
        let mut session = build_session();
        let now = Instant::now();

        sequencer.enter_phase(&mut session, now, &mut presenter);
        sequencer.pause(&mut session, &mut presenter);
        sequencer.skip(&mut session, now, &mut presenter);

        assert_eq!(session.items_completed, 1);
        assert!(session.is_paused);
        assert!(!session.timer.is_pending());
        assert_eq!(presenter.frames.len(), 1);
    }
}
