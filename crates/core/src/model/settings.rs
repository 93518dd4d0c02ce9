use std::time::Duration;

use thiserror::Error;

use crate::model::phase::PhaseState;

pub const DEFAULT_PROMPT_MS: u32 = 3_000;
pub const DEFAULT_REVEAL_FIRST_MS: u32 = 2_000;
pub const DEFAULT_REVEAL_SECOND_MS: u32 = 3_000;
pub const DEFAULT_ADVANCE_GAP_MS: u32 = 500;

const MAX_PHASE_MS: u32 = 600_000;
const MAX_ADVANCE_GAP_MS: u32 = 10_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("{phase:?} duration must be between 1 and {max} ms (got {value})", max = MAX_PHASE_MS)]
    InvalidPhaseDuration { phase: PhaseState, value: u32 },

    #[error("advance gap must be at most {max} ms (got {0})", max = MAX_ADVANCE_GAP_MS)]
    InvalidAdvanceGap(u32),
}

/// How long each phase stays on screen, plus the pause before the next pair.
///
/// The advance gap is purely cosmetic; `0` moves to the next pair at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTimings {
    prompt_ms: u32,
    reveal_first_ms: u32,
    reveal_second_ms: u32,
    advance_gap_ms: u32,
}

impl Default for PhaseTimings {
    fn default() -> Self {
        Self {
            prompt_ms: DEFAULT_PROMPT_MS,
            reveal_first_ms: DEFAULT_REVEAL_FIRST_MS,
            reveal_second_ms: DEFAULT_REVEAL_SECOND_MS,
            advance_gap_ms: DEFAULT_ADVANCE_GAP_MS,
        }
    }
}

impl PhaseTimings {
    /// Creates custom timings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if a phase duration is zero or too long, or the
    /// gap exceeds its upper bound.
    pub fn new(
        prompt_ms: u32,
        reveal_first_ms: u32,
        reveal_second_ms: u32,
        advance_gap_ms: u32,
    ) -> Result<Self, SettingsError> {
        for (phase, value) in [
            (PhaseState::Prompt, prompt_ms),
            (PhaseState::RevealFirst, reveal_first_ms),
            (PhaseState::RevealSecond, reveal_second_ms),
        ] {
            if !(1..=MAX_PHASE_MS).contains(&value) {
                return Err(SettingsError::InvalidPhaseDuration { phase, value });
            }
        }
        if advance_gap_ms > MAX_ADVANCE_GAP_MS {
            return Err(SettingsError::InvalidAdvanceGap(advance_gap_ms));
        }

        Ok(Self {
            prompt_ms,
            reveal_first_ms,
            reveal_second_ms,
            advance_gap_ms,
        })
    }

    #[must_use]
    pub fn phase_ms(&self, phase: PhaseState) -> u32 {
        match phase {
            PhaseState::Prompt => self.prompt_ms,
            PhaseState::RevealFirst => self.reveal_first_ms,
            PhaseState::RevealSecond => self.reveal_second_ms,
        }
    }

    #[must_use]
    pub fn duration_of(&self, phase: PhaseState) -> Duration {
        Duration::from_millis(u64::from(self.phase_ms(phase)))
    }

    #[must_use]
    pub fn advance_gap(&self) -> Duration {
        Duration::from_millis(u64::from(self.advance_gap_ms))
    }

    #[must_use]
    pub fn advance_gap_ms(&self) -> u32 {
        self.advance_gap_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_drill_rhythm() {
        let timings = PhaseTimings::default();
        assert_eq!(timings.phase_ms(PhaseState::Prompt), 3_000);
        assert_eq!(timings.phase_ms(PhaseState::RevealFirst), 2_000);
        assert_eq!(timings.phase_ms(PhaseState::RevealSecond), 3_000);
        assert_eq!(timings.advance_gap(), Duration::from_millis(500));
    }

    #[test]
    fn rejects_zero_phase_duration() {
        let err = PhaseTimings::new(3_000, 0, 3_000, 500).unwrap_err();
        assert_eq!(
            err,
            SettingsError::InvalidPhaseDuration {
                phase: PhaseState::RevealFirst,
                value: 0
            }
        );
    }

    #[test]
    fn allows_zero_gap_but_caps_it() {
        assert!(PhaseTimings::new(1, 1, 1, 0).is_ok());
        assert_eq!(
            PhaseTimings::new(1, 1, 1, 10_001).unwrap_err(),
            SettingsError::InvalidAdvanceGap(10_001)
        );
    }
}
