//! Engine configuration: the time unit of a day-vector and slot settings.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::mask::WORD_BITS;
use crate::vector::BitsetInput;

/// Number of minutes covered by one day-vector.
pub const MINUTES_IN_DAY: u32 = 1440;

/// Minutes represented by a single bit of a day-vector.
///
/// Canonical values are 1 and 5. Any unit in `1..=1440` is accepted; units
/// that do not divide the day evenly produce a final partial bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TimeUnit(u32);

impl TimeUnit {
    pub const ONE_MINUTE: TimeUnit = TimeUnit(1);
    pub const FIVE_MINUTES: TimeUnit = TimeUnit(5);

    pub fn new(minutes: u32) -> Result<Self> {
        if minutes == 0 || minutes > MINUTES_IN_DAY {
            return Err(SlotError::InvalidTimeUnit(minutes));
        }
        Ok(TimeUnit(minutes))
    }

    #[inline]
    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Number of significant bits in a day-vector: `ceil(1440 / unit)`.
    #[inline]
    pub fn bits(self) -> usize {
        MINUTES_IN_DAY.div_ceil(self.0) as usize
    }

    /// Number of packed words holding [`bits`](Self::bits).
    #[inline]
    pub fn words(self) -> usize {
        self.bits().div_ceil(WORD_BITS)
    }

    #[inline]
    pub fn minutes_to_units_floor(self, minutes: u32) -> usize {
        (minutes / self.0) as usize
    }

    /// Number of units needed to cover `minutes` entirely.
    #[inline]
    pub fn minutes_to_units_ceil(self, minutes: u32) -> usize {
        minutes.div_ceil(self.0) as usize
    }

    #[inline]
    pub fn units_to_minutes(self, units: usize) -> u32 {
        units as u32 * self.0
    }

    /// Guess the time unit an input was produced with.
    ///
    /// Text with more than 1000 significant characters, or more than 9 packed
    /// words, is taken to be a 1-minute vector; everything else 5-minute.
    pub fn infer(input: &BitsetInput) -> TimeUnit {
        let fine = match input {
            BitsetInput::Text(text) => {
                text.chars().filter(|c| matches!(c, '0' | '1')).count() > 1000
            }
            BitsetInput::Words(words) => words.len() > TimeUnit::FIVE_MINUTES.words(),
        };
        if fine {
            TimeUnit::ONE_MINUTE
        } else {
            TimeUnit::FIVE_MINUTES
        }
    }
}

impl Default for TimeUnit {
    fn default() -> Self {
        TimeUnit::FIVE_MINUTES
    }
}

impl TryFrom<u32> for TimeUnit {
    type Error = SlotError;

    fn try_from(minutes: u32) -> Result<Self> {
        TimeUnit::new(minutes)
    }
}

impl From<TimeUnit> for u32 {
    fn from(unit: TimeUnit) -> u32 {
        unit.0
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}min", self.0)
    }
}

/// Settings for turning day-vectors into bookable slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlotConfig {
    pub time_unit: TimeUnit,
    /// Length of one slot tile handed to `free_run_starts`, in minutes.
    pub tile_minutes: u32,
}

impl Default for SlotConfig {
    fn default() -> Self {
        SlotConfig {
            time_unit: TimeUnit::default(),
            tile_minutes: 30,
        }
    }
}

impl SlotConfig {
    /// Tile length in bits. Never zero.
    pub fn tile_units(&self) -> usize {
        self.time_unit.minutes_to_units_floor(self.tile_minutes).max(1)
    }
}
