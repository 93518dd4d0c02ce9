mod clock;
mod controller;
mod driver;
mod input;
mod sequencer;
mod session;

// Public API of the playback subsystem.
pub use clock::PlaybackClock;
pub use controller::SessionController;
pub use driver::{PlaybackCommand, drive};
pub use input::{InputEvent, Key, SWIPE_THRESHOLD_PX, SessionAction};
pub use sequencer::PhaseSequencer;
pub use session::{Cue, PlaybackSession, SessionSummary};
