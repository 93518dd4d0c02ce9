#![forbid(unsafe_code)]

pub mod error;
pub mod playback;
pub mod presenter;

pub use drill_core::Clock;

pub use error::SessionError;
pub use playback::{
    InputEvent, Key, PhaseSequencer, PlaybackClock, PlaybackCommand, PlaybackSession,
    SessionController, SessionSummary, drive,
};
pub use presenter::{PlaybackStatus, Presenter, RecordingPresenter};
