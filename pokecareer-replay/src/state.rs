use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Tick cadence at normal speed.
pub const BASE_TICK_MS: u64 = 1000;

/// Playback speed of a battle replay.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum ReplaySpeed {
    #[string = "0.5x"]
    Half,
    #[string = "1x"]
    #[default]
    Normal,
    #[string = "2x"]
    Double,
    #[string = "4x"]
    Quadruple,
}

impl ReplaySpeed {
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Half => 0.5,
            Self::Normal => 1.0,
            Self::Double => 2.0,
            Self::Quadruple => 4.0,
        }
    }

    /// The timer interval at this speed.
    ///
    /// Must be re-derived on every speed change; the timer restarts with the
    /// new interval rather than drifting in on the next tick.
    pub fn interval(&self) -> Duration {
        Duration::from_millis((BASE_TICK_MS as f64 / self.multiplier()).round() as u64)
    }
}

/// Cursor state of a replay session.
///
/// Invariant: `0 <= tick < log.len()`. The tick is monotonically
/// non-decreasing while playing and not at the final index.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayState {
    pub tick: usize,
    pub is_playing: bool,
    pub speed: ReplaySpeed,
}

/// Advances a replay cursor by one tick, clamped to the final index of a log
/// of the given length.
pub fn advance_tick(tick: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (tick + 1).min(len - 1)
    }
}

/// Whether the cursor has reached the final index and can no longer advance.
pub fn at_final_tick(tick: usize, len: usize) -> bool {
    len == 0 || tick + 1 >= len
}
