//! Booking vectors: where can a booking of a given length start?
//!
//! Bit `i` of a booking vector is free iff `sz` consecutive units starting at
//! `i` all lie inside one free run of the source vector.

use tracing::trace;

use crate::scan::{find_first_one, find_first_zero};
use crate::vector::DayVector;

/// Build the booking vector of `vector` for a booking `sz` units long,
/// considering start positions at or after `start_offset`.
///
/// For each free run `[s, e)` at least `sz` long, bits `[s, e - sz]` are set
/// with word-granular fills. A zero-length booking has no valid start and
/// yields an all-busy vector.
pub fn build_booking_vector(vector: &DayVector, start_offset: usize, sz: usize) -> DayVector {
    let mut booking = DayVector::busy(vector.time_unit());
    if sz == 0 {
        return booking;
    }

    let day_end = vector.bit_len();
    let mut cursor = start_offset;
    let mut runs = 0usize;
    while let Some(start) = find_first_one(vector, cursor) {
        let end = find_first_zero(vector, start).unwrap_or(day_end);
        if end - start >= sz {
            booking.fill_ones(start, end - start - sz + 1);
            runs += 1;
        }
        cursor = end;
    }

    trace!(sz, start_offset, runs, "built booking vector");
    booking
}

/// Like [`build_booking_vector`], with the booking length given in minutes.
///
/// Durations that are not a whole number of units are rounded up, so the
/// booking is never shortened.
pub fn build_booking_vector_for_minutes(
    vector: &DayVector,
    start_minute: u32,
    duration_minutes: u32,
) -> DayVector {
    let unit = vector.time_unit();
    build_booking_vector(
        vector,
        unit.minutes_to_units_floor(start_minute),
        unit.minutes_to_units_ceil(duration_minutes),
    )
}
