//! Back-to-back service sequences.
//!
//! Service `k` of a chain starts `sum(durations[..k])` minutes after the
//! first. Shifting its booking vector that far toward the start of the day
//! lines its valid starts up with the first service's, so the AND of all
//! shifted vectors marks the starts where the whole chain fits with no gaps.

use tracing::trace;

use crate::booking::build_booking_vector_for_minutes;
use crate::config::TimeUnit;
use crate::error::{Result, SlotError};
use crate::mask::WORD_BITS;
use crate::vector::DayVector;

/// Shift `vector` toward earlier time by `shift` bits.
///
/// Bits moved past 00:00 are dropped and the vacated tail is busy. Shifting
/// by a whole day or more yields an all-busy vector. Takes the vector by value
/// and reuses its storage; clone first if the input is still needed.
pub fn left_shift(mut vector: DayVector, shift: usize) -> DayVector {
    if shift == 0 {
        return vector;
    }
    let day_end = vector.bit_len();
    let words = vector.words_mut();
    if shift >= day_end {
        words.fill(0);
        return vector;
    }

    let count = words.len();
    let word_shift = shift / WORD_BITS;
    let bit_shift = shift % WORD_BITS;

    if word_shift > 0 {
        words.copy_within(word_shift.., 0);
        words[count - word_shift..].fill(0);
    }
    if bit_shift > 0 {
        for i in 0..count {
            let carry = words.get(i + 1).map_or(0, |next| next >> (WORD_BITS - bit_shift));
            words[i] = (words[i] << bit_shift) | carry;
        }
    }
    vector
}

/// Compose per-service booking vectors into the booking vector of the whole
/// ordered chain.
///
/// `booking_vectors[k]` must already be built for service `k`'s own duration;
/// `durations_minutes[k]` is that duration. The fold starts from an all-free
/// vector of `time_unit`, so a single service comes back unchanged and an
/// empty chain is free everywhere.
pub fn compose_sequence(
    booking_vectors: &[DayVector],
    durations_minutes: &[u32],
    time_unit: TimeUnit,
) -> Result<DayVector> {
    if booking_vectors.len() != durations_minutes.len() {
        return Err(SlotError::SequenceShape {
            vectors: booking_vectors.len(),
            durations: durations_minutes.len(),
        });
    }

    let mut composed = DayVector::free(time_unit);
    let mut offset_minutes = 0u32;
    for (vector, &duration) in booking_vectors.iter().zip(durations_minutes) {
        let shift = time_unit.minutes_to_units_floor(offset_minutes);
        let shifted = left_shift(vector.clone(), shift);
        composed.and_assign(&shifted)?;
        offset_minutes = offset_minutes.saturating_add(duration);
    }

    trace!(
        services = booking_vectors.len(),
        total_minutes = offset_minutes,
        free = composed.count_ones(),
        "composed sequence"
    );
    Ok(composed)
}

/// Valid chain starts when every service is performed on the same resource.
///
/// Builds one booking vector per duration from `vector`, then composes them.
pub fn sequence_booking_vector(
    vector: &DayVector,
    start_minute: u32,
    durations_minutes: &[u32],
) -> Result<DayVector> {
    let bookings: Vec<DayVector> = durations_minutes
        .iter()
        .map(|&duration| build_booking_vector_for_minutes(vector, start_minute, duration))
        .collect();
    compose_sequence(&bookings, durations_minutes, vector.time_unit())
}
