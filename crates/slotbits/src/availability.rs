//! Point and boundary queries over a day-vector, and merging of several
//! resources' vectors into one view.
//!
//! Range checks compare whole words against span masks, so a query costs
//! O(words spanned) regardless of how many minutes it covers.

use serde::{Deserialize, Serialize};

use crate::config::{TimeUnit, MINUTES_IN_DAY};
use crate::error::Result;
use crate::mask::{span_mask, WORD_BITS};
use crate::scan::{find_first_one, find_last_one};
use crate::vector::DayVector;

/// First and last free minute of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FreeBounds {
    /// Minute at which the first free unit begins.
    pub start: Option<u32>,
    /// Minute at which the last free unit ends.
    pub end: Option<u32>,
}

/// Whether `[start_minute, end_minute)` is entirely free.
///
/// The range is widened outward to whole time units. An empty or inverted
/// range is never available, and neither is one running past 24:00.
pub fn is_slot_available(vector: &DayVector, start_minute: u32, end_minute: u32) -> bool {
    if end_minute <= start_minute || end_minute > MINUTES_IN_DAY {
        return false;
    }
    let unit = vector.time_unit();
    let start = unit.minutes_to_units_floor(start_minute);
    let end = unit.minutes_to_units_ceil(end_minute).min(vector.bit_len());
    range_is_free(vector, start, end)
}

/// Whether bits `[start, end)` are all free, checked a word at a time.
pub fn range_is_free(vector: &DayVector, start: usize, end: usize) -> bool {
    if start >= end || end > vector.bit_len() {
        return false;
    }
    let words = vector.words();
    let mut bit = start;
    while bit < end {
        let from = bit % WORD_BITS;
        let take = (WORD_BITS - from).min(end - bit);
        let word = words[bit / WORD_BITS];
        if word | span_mask(from, take) != word {
            return false;
        }
        bit += take;
    }
    true
}

/// First free minute and end of the last free unit, or `None` for both when
/// the day is fully busy.
pub fn first_last_minutes(vector: &DayVector) -> FreeBounds {
    let unit = vector.time_unit();
    FreeBounds {
        start: find_first_one(vector, 0).map(|bit| unit.units_to_minutes(bit)),
        end: find_last_one(vector)
            .map(|bit| unit.units_to_minutes(bit + 1).min(MINUTES_IN_DAY)),
    }
}

/// Units that are free on every vector, e.g. a room and the staff member
/// who needs it. No vectors means the whole day.
pub fn intersect_all(vectors: &[DayVector], time_unit: TimeUnit) -> Result<DayVector> {
    vectors
        .iter()
        .try_fold(DayVector::free(time_unit), |acc, v| acc.and(v))
}

/// Units that are free on at least one vector. No vectors means fully busy.
pub fn union_all(vectors: &[DayVector], time_unit: TimeUnit) -> Result<DayVector> {
    vectors
        .iter()
        .try_fold(DayVector::busy(time_unit), |acc, v| acc.or(v))
}
