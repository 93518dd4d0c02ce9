use drill_core::model::PhaseFrame;

use crate::error::SessionError;

/// Whether the drill is currently running, held, or back at the start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Playing,
    Paused,
    Idle,
}

/// Presentation collaborator fed by the sequencer.
///
/// Only `render` and `progress` are required; the rest default to no-ops for
/// outputs that have no pause button or start screen to update.
pub trait Presenter {
    /// Called on every phase entry.
    fn render(&mut self, frame: &PhaseFrame);

    /// Called whenever the number of completed sentences changes.
    fn progress(&mut self, items_completed: u64);

    fn status(&mut self, _status: PlaybackStatus) {}

    /// Restore the initial, pre-session display.
    fn reset(&mut self) {}

    /// A start request from the input layer could not be honored.
    fn session_failed(&mut self, _error: &SessionError) {}
}

/// Presenter that keeps everything it receives, for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    pub frames: Vec<PhaseFrame>,
    pub progress: Vec<u64>,
    pub statuses: Vec<PlaybackStatus>,
    pub resets: usize,
    pub failures: Vec<String>,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&PhaseFrame> {
        self.frames.last()
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, frame: &PhaseFrame) {
        self.frames.push(frame.clone());
    }

    fn progress(&mut self, items_completed: u64) {
        self.progress.push(items_completed);
    }

    fn status(&mut self, status: PlaybackStatus) {
        self.statuses.push(status);
    }

    fn reset(&mut self) {
        self.resets += 1;
    }

    fn session_failed(&mut self, error: &SessionError) {
        self.failures.push(error.to_string());
    }
}
