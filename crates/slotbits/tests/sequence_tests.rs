//! Tests for left shifting and back-to-back sequence composition.

use slotbits::booking::build_booking_vector;
use slotbits::mask::{LEFT_MASK, RIGHT_MASK};
use slotbits::scan::one_positions;
use slotbits::sequence::{compose_sequence, left_shift, sequence_booking_vector};
use slotbits::{DayVector, SlotError, TimeUnit};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn five() -> TimeUnit {
    TimeUnit::FIVE_MINUTES
}

fn leading(prefix: &[u32]) -> DayVector {
    let mut all = vec![0u32; 9];
    all[..prefix.len()].copy_from_slice(prefix);
    DayVector::from_words(all, five()).unwrap()
}

fn span(start: usize, len: usize) -> DayVector {
    let mut v = DayVector::busy(five());
    v.fill_ones(start, len);
    v
}

// ── left_shift ──────────────────────────────────────────────────────────────

#[test]
fn zero_shift_is_identity() {
    let v = leading(&[1 << 10, 1 << 12, 1 << 7]);
    assert_eq!(left_shift(v.clone(), 0), v);
}

#[test]
fn second_bit_becomes_first() {
    let shifted = left_shift(leading(&[1 << 30]), 1);
    assert_eq!(shifted.words()[0], 1 << 31);
}

#[test]
fn shift_over_a_word() {
    let shifted = left_shift(leading(&[1 << 29, 1 << 29, 1 << 29]), 33);
    assert_eq!(&shifted.words()[..3], &[1 << 30, 1 << 30, 0]);
}

#[test]
fn carry_moves_bits_between_words() {
    let shifted = left_shift(leading(&[RIGHT_MASK[2], LEFT_MASK[28]]), 30);
    assert_eq!(shifted.words()[0], LEFT_MASK[30]);
    assert_eq!(shifted.words()[1], 0);
}

#[test]
fn vacated_tail_is_busy() {
    let shifted = left_shift(DayVector::free(five()), 10);
    assert_eq!(shifted.count_ones(), 278);
    assert!(shifted.get(277));
    assert!(!shifted.get(278));
}

#[test]
fn shift_by_whole_words_only() {
    let shifted = left_shift(span(64, 4), 64);
    assert_eq!(one_positions(&shifted), vec![0, 1, 2, 3]);
}

#[test]
fn shift_past_day_is_all_busy() {
    assert!(left_shift(DayVector::free(five()), 288).is_busy());
    assert!(left_shift(DayVector::free(five()), 10_000).is_busy());
    assert!(left_shift(DayVector::free(TimeUnit::ONE_MINUTE), 1440).is_busy());
}

#[test]
fn shift_keeps_padding_busy() {
    let unit = TimeUnit::new(7).unwrap();
    let shifted = left_shift(DayVector::free(unit), 3);
    assert_eq!(shifted.count_ones(), 203);
    assert_eq!(shifted.words()[6], LEFT_MASK[11]);
}

// ── compose_sequence ────────────────────────────────────────────────────────

#[test]
fn single_service_sequence_is_unchanged() {
    let v = leading(&[1 << 10, 1 << 12, 1 << 7]);
    let composed = compose_sequence(std::slice::from_ref(&v), &[5], five()).unwrap();
    assert_eq!(composed, v);
}

#[test]
fn empty_sequence_is_free_day() {
    let composed = compose_sequence(&[], &[], five()).unwrap();
    assert_eq!(composed, DayVector::free(five()));
}

#[test]
fn three_unit_services_in_a_row() {
    let vectors = [
        leading(&[1 << 31]),
        leading(&[1 << 30]),
        leading(&[1 << 29]),
    ];
    let composed = compose_sequence(&vectors, &[5, 5, 5], five()).unwrap();
    assert_eq!(composed.words()[0], 1 << 31);
    assert_eq!(composed.count_ones(), 1);
}

#[test]
fn three_services_of_different_durations() {
    let vectors = [
        leading(&[LEFT_MASK[1]]),
        leading(&[LEFT_MASK[2] >> 1]),
        leading(&[LEFT_MASK[3] >> 3]),
    ];
    let composed = compose_sequence(&vectors, &[5, 10, 15], five()).unwrap();
    assert_eq!(composed.words()[0], LEFT_MASK[1]);
}

#[test]
fn gap_between_services_gives_nothing() {
    let vectors = [
        leading(&[LEFT_MASK[1]]),
        leading(&[LEFT_MASK[2] >> 1]),
        leading(&[LEFT_MASK[3] >> 4]),
    ];
    let composed = compose_sequence(&vectors, &[5, 10, 15], five()).unwrap();
    assert!(composed.is_busy());
}

#[test]
fn first_service_window_overlays_second() {
    let vectors = [span(0, 30), span(10, 20)];
    let composed = compose_sequence(&vectors, &[50, 100], five()).unwrap();
    assert_eq!(composed.words()[0], LEFT_MASK[20]);
}

#[test]
fn sequence_crossing_word_boundary() {
    let vectors = [span(0, 10), span(10, 20), span(30, 30)];
    let composed = compose_sequence(&vectors, &[50, 100, 150], five()).unwrap();
    assert_eq!(composed.words()[0], LEFT_MASK[10]);
    assert_eq!(composed.count_ones(), 10);
}

#[test]
fn booking_vectors_from_adjacent_runs_compose_to_one_start() {
    // Three resources, each free exactly for its own service, back to back.
    let bookings = [
        build_booking_vector(&span(0, 10), 0, 10),
        build_booking_vector(&span(10, 20), 0, 20),
        build_booking_vector(&span(30, 30), 0, 30),
    ];
    let composed = compose_sequence(&bookings, &[50, 100, 150], five()).unwrap();
    assert_eq!(one_positions(&composed), vec![0]);
}

#[test]
fn booking_vectors_with_gap_compose_to_nothing() {
    let bookings = [
        build_booking_vector(&span(0, 10), 0, 10),
        build_booking_vector(&span(10, 20), 0, 20),
        build_booking_vector(&span(31, 30), 0, 30),
    ];
    let composed = compose_sequence(&bookings, &[50, 100, 150], five()).unwrap();
    assert!(composed.is_busy());
}

#[test]
fn inputs_are_not_modified() {
    let vectors = [span(0, 30), span(10, 20)];
    let before = vectors.clone();
    compose_sequence(&vectors, &[50, 100], five()).unwrap();
    assert_eq!(vectors, before);
}

#[test]
fn mismatched_shapes_are_rejected() {
    let result = compose_sequence(&[span(0, 10)], &[50, 100], five());
    assert!(matches!(
        result,
        Err(SlotError::SequenceShape {
            vectors: 1,
            durations: 2
        })
    ));
}

#[test]
fn mismatched_time_units_are_rejected() {
    let result = compose_sequence(&[DayVector::free(TimeUnit::ONE_MINUTE)], &[30], five());
    assert!(matches!(result, Err(SlotError::TimeUnitMismatch { .. })));
}

// ── sequence_booking_vector ─────────────────────────────────────────────────

#[test]
fn chain_on_one_resource() {
    // Free 09:00-12:00; a 30 + 60 minute chain can start 09:00..=10:30.
    let v = span(108, 36);
    let composed = sequence_booking_vector(&v, 0, &[30, 60]).unwrap();
    assert_eq!(one_positions(&composed), (108..=126).collect::<Vec<_>>());
}

#[test]
fn chain_longer_than_free_time() {
    let v = span(108, 12);
    assert!(sequence_booking_vector(&v, 0, &[30, 45]).unwrap().is_busy());
}

#[test]
fn huge_durations_compose_to_busy() {
    let free = DayVector::free(five());
    let composed = compose_sequence(&[free.clone(), free], &[u32::MAX, 1], five()).unwrap();
    assert!(composed.is_busy());

    let v = span(0, 288);
    assert!(sequence_booking_vector(&v, 0, &[u32::MAX, u32::MAX, 5])
        .unwrap()
        .is_busy());
}
