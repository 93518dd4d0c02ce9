/// Minimum vertical travel, in pixels, for a touch gesture to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Keys the drill reacts to. Anything else is `Other` and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Enter,
    ArrowRight,
    Escape,
    Other,
}

/// Raw events from the input layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(Key),
    /// A touch that started at `start_y` and ended at `end_y` (screen coordinates).
    Swipe { start_y: f32, end_y: f32 },
    /// The output went to the background or was hidden.
    VisibilityLost,
}

/// What an input event asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    TogglePause,
    Skip,
    Stop,
    Pause,
}

impl InputEvent {
    /// Maps the event to a session action, if it has one.
    ///
    /// Swiping up skips, swiping down toggles pause; shorter gestures are ignored.
    #[must_use]
    pub fn action(self) -> Option<SessionAction> {
        match self {
            InputEvent::Key(Key::Space) => Some(SessionAction::TogglePause),
            InputEvent::Key(Key::Enter | Key::ArrowRight) => Some(SessionAction::Skip),
            InputEvent::Key(Key::Escape) => Some(SessionAction::Stop),
            InputEvent::Key(Key::Other) => None,
            InputEvent::Swipe { start_y, end_y } => {
                let travel = start_y - end_y;
                if travel > SWIPE_THRESHOLD_PX {
                    Some(SessionAction::Skip)
                } else if travel < -SWIPE_THRESHOLD_PX {
                    Some(SessionAction::TogglePause)
                } else {
                    None
                }
            }
            InputEvent::VisibilityLost => Some(SessionAction::Pause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(
            InputEvent::Key(Key::Space).action(),
            Some(SessionAction::TogglePause)
        );
        assert_eq!(InputEvent::Key(Key::Enter).action(), Some(SessionAction::Skip));
        assert_eq!(
            InputEvent::Key(Key::ArrowRight).action(),
            Some(SessionAction::Skip)
        );
        assert_eq!(InputEvent::Key(Key::Escape).action(), Some(SessionAction::Stop));
        assert_eq!(InputEvent::Key(Key::Other).action(), None);
    }

    #[test]
    fn swipes_need_to_clear_the_threshold() {
        let up = InputEvent::Swipe {
            start_y: 400.0,
            end_y: 300.0,
        };
        let down = InputEvent::Swipe {
            start_y: 300.0,
            end_y: 400.0,
        };
        let short = InputEvent::Swipe {
            start_y: 300.0,
            end_y: 250.0,
        };

        assert_eq!(up.action(), Some(SessionAction::Skip));
        assert_eq!(down.action(), Some(SessionAction::TogglePause));
        assert_eq!(short.action(), None);
    }
}
