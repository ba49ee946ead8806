use crate::consts;
use enum_map::Enum;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// How fast the snake moves
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub(crate) fn iter() -> impl Iterator<Item = Difficulty> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    pub(crate) fn profile(self) -> SpeedProfile {
        match self {
            Difficulty::Easy => SpeedProfile {
                base: Duration::from_millis(230),
                min: Duration::from_millis(120),
                step: Duration::from_millis(6),
            },
            Difficulty::Medium => SpeedProfile {
                base: Duration::from_millis(190),
                min: Duration::from_millis(80),
                step: Duration::from_millis(7),
            },
            Difficulty::Hard => SpeedProfile {
                base: Duration::from_millis(160),
                min: Duration::from_millis(60),
                step: Duration::from_millis(8),
            },
        }
    }

    /// The key that selects this difficulty
    pub(crate) fn hotkey(self) -> char {
        match self {
            Difficulty::Easy => '1',
            Difficulty::Medium => '2',
            Difficulty::Hard => '3',
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Difficulty, ParseDifficultyError> {
        Difficulty::iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseDifficultyError)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("invalid difficulty; expected \"easy\", \"medium\", or \"hard\"")]
pub(crate) struct ParseDifficultyError;

/// Tick intervals for a difficulty level
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SpeedProfile {
    /// Interval at the start of a game
    pub(crate) base: Duration,

    /// The interval never drops below this
    pub(crate) min: Duration,

    /// How much the interval shrinks per point once the speed starts ramping
    pub(crate) step: Duration,
}

impl SpeedProfile {
    /// Compute the tick interval for the given score.  The first
    /// [`SPEED_RAMP_OFFSET`][consts::SPEED_RAMP_OFFSET] points don't speed
    /// anything up.
    pub(crate) fn interval(self, score: u32) -> Duration {
        let effective = score.saturating_sub(consts::SPEED_RAMP_OFFSET);
        self.base
            .saturating_sub(self.step.saturating_mul(effective))
            .max(self.min)
    }
}

/// Express a tick interval as the number of cells the snake moves per second.
/// Intervals come from [`SpeedProfile::interval()`] and so are never zero.
pub(crate) fn moves_per_second(interval: Duration) -> f64 {
    interval.as_secs_f64().recip()
}
