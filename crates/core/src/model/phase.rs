use crate::model::sentence::SentencePair;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// The three display phases every sentence pair goes through.
///
/// Phases advance `Prompt -> RevealFirst -> RevealSecond` and then start over
/// at `Prompt` with the next pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhaseState {
    /// Source text only; the learner tries to recall the answer.
    #[default]
    Prompt,
    /// First exposure of the target text.
    RevealFirst,
    /// Second exposure of the same target text, for retention.
    RevealSecond,
}

impl PhaseState {
    pub const ALL: [PhaseState; 3] = [
        PhaseState::Prompt,
        PhaseState::RevealFirst,
        PhaseState::RevealSecond,
    ];

    /// The phase that follows this one for the same pair, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            PhaseState::Prompt => Some(PhaseState::RevealFirst),
            PhaseState::RevealFirst => Some(PhaseState::RevealSecond),
            PhaseState::RevealSecond => None,
        }
    }

    /// 1-based position within the cycle.
    #[must_use]
    pub fn ordinal(self) -> u8 {
        match self {
            PhaseState::Prompt => 1,
            PhaseState::RevealFirst => 2,
            PhaseState::RevealSecond => 3,
        }
    }

    #[must_use]
    pub fn progress_fraction(self) -> f32 {
        match self {
            PhaseState::Prompt => 0.33,
            PhaseState::RevealFirst => 0.66,
            PhaseState::RevealSecond => 1.0,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PhaseState::Prompt => "Recall the translation",
            PhaseState::RevealFirst => "Check the answer",
            PhaseState::RevealSecond => "Review and remember it",
        }
    }

    /// Text of `pair` shown during this phase.
    #[must_use]
    pub fn display_text(self, pair: &SentencePair) -> &str {
        match self {
            PhaseState::Prompt => pair.source_text(),
            PhaseState::RevealFirst | PhaseState::RevealSecond => pair.target_text(),
        }
    }
}

//
// ─── FRAME ─────────────────────────────────────────────────────────────────────
//

/// Display payload handed to the presentation layer on every phase entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseFrame {
    pub phase: PhaseState,
    pub display_text: String,
    pub progress_fraction: f32,
    pub progress_label: &'static str,
}

impl PhaseFrame {
    #[must_use]
    pub fn new(phase: PhaseState, pair: &SentencePair) -> Self {
        Self {
            phase,
            display_text: phase.display_text(pair).to_owned(),
            progress_fraction: phase.progress_fraction(),
            progress_label: phase.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_cycle_in_order() {
        assert_eq!(PhaseState::Prompt.next(), Some(PhaseState::RevealFirst));
        assert_eq!(PhaseState::RevealFirst.next(), Some(PhaseState::RevealSecond));
        assert_eq!(PhaseState::RevealSecond.next(), None);
        assert_eq!(PhaseState::default(), PhaseState::Prompt);
    }

    #[test]
    fn reveal_phases_repeat_target_text() {
        let pair = SentencePair::new("안녕", "Hello");

        let frames: Vec<_> = PhaseState::ALL
            .iter()
            .map(|phase| PhaseFrame::new(*phase, &pair))
            .collect();

        assert_eq!(frames[0].display_text, "안녕");
        assert_eq!(frames[1].display_text, "Hello");
        assert_eq!(frames[2].display_text, "Hello");
        assert_eq!(frames[0].progress_fraction, 0.33);
        assert_eq!(frames[1].progress_fraction, 0.66);
        assert_eq!(frames[2].progress_fraction, 1.0);
    }
}
