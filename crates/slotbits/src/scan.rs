//! Scans over a day-vector: bit iteration, free runs, first set/unset bit.
//!
//! [`scan_bits`] is the reference, bit-at-a-time view. Everything else works a
//! word at a time and uses `leading_zeros` to jump straight to the next
//! interesting bit, so a scan costs O(words), not O(bits).

use serde::Serialize;

use crate::mask::{bit_mask, Word, WORD_BITS};
use crate::vector::DayVector;

/// A maximal stretch of free bits, in time units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Run {
    pub start: usize,
    pub len: usize,
}

impl Run {
    /// Exclusive end offset.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Visit every bit in `[offset, end)` in increasing order.
///
/// `end` defaults to the end of the day and is clamped to it.
pub fn scan_bits(
    vector: &DayVector,
    offset: usize,
    end: Option<usize>,
    mut visit: impl FnMut(bool, usize),
) {
    let end = end.unwrap_or(vector.bit_len()).min(vector.bit_len());
    let words = vector.words();
    let mut bit = offset;
    while bit < end {
        let word = words[bit / WORD_BITS];
        let stop = ((bit / WORD_BITS + 1) * WORD_BITS).min(end);
        while bit < stop {
            visit(word & bit_mask(bit % WORD_BITS) != 0, bit);
            bit += 1;
        }
    }
}

/// Position of the first free bit at or after `pos`.
pub fn find_first_one(vector: &DayVector, pos: usize) -> Option<usize> {
    find_first(vector.words(), vector.bit_len(), pos, |w| w)
}

/// Position of the first busy bit at or after `pos`.
///
/// Scans the complement of the vector; the end of the day is not a busy bit,
/// so a run reaching 24:00 yields `None`.
pub fn find_first_zero(vector: &DayVector, pos: usize) -> Option<usize> {
    find_first(vector.words(), vector.bit_len(), pos, |w| !w)
}

fn find_first(
    words: &[Word],
    len: usize,
    pos: usize,
    load: impl Fn(Word) -> Word,
) -> Option<usize> {
    if pos >= len {
        return None;
    }
    let mut index = pos / WORD_BITS;
    // Bits before `pos` are shifted out; `base` is the bit now in the MSB.
    let mut word = load(words[index]) << (pos % WORD_BITS);
    let mut base = pos;
    loop {
        if word != 0 {
            let found = base + word.leading_zeros() as usize;
            // A hit inside the padding means the day ran out first.
            return (found < len).then_some(found);
        }
        index += 1;
        if index >= words.len() {
            return None;
        }
        word = load(words[index]);
        base = index * WORD_BITS;
    }
}

/// Position of the last free bit of the day.
pub fn find_last_one(vector: &DayVector) -> Option<usize> {
    vector
        .words()
        .iter()
        .enumerate()
        .rev()
        .find(|(_, word)| **word != 0)
        .map(|(index, word)| index * WORD_BITS + WORD_BITS - 1 - word.trailing_zeros() as usize)
}

/// All maximal free runs at or after `offset`.
///
/// A run already in progress at `offset` is reported as starting at `offset`.
pub fn free_runs(vector: &DayVector, offset: usize) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut cursor = offset;
    while let Some(start) = find_first_one(vector, cursor) {
        let end = find_first_zero(vector, start).unwrap_or(vector.bit_len());
        runs.push(Run {
            start,
            len: end - start,
        });
        cursor = end;
    }
    runs
}

/// Start offsets of non-overlapping tiles of `run_length` free bits.
///
/// Each maximal free run is cut into consecutive tiles from its start; a tile
/// begins right where the previous one ended and a leftover shorter than
/// `run_length` at the tail of the run is dropped. This is tiling, not a
/// sliding window. A `run_length` of 0 behaves like 1.
pub fn free_run_starts(vector: &DayVector, run_length: usize, offset: usize) -> Vec<usize> {
    let run_length = run_length.max(1);
    let mut starts = Vec::new();
    for run in free_runs(vector, offset) {
        let mut tile = run.start;
        while run.end() - tile >= run_length {
            starts.push(tile);
            tile += run_length;
        }
    }
    starts
}

/// Every free bit of the day, in order.
///
/// On a booking vector these are all the valid start offsets.
pub fn one_positions(vector: &DayVector) -> Vec<usize> {
    let mut positions = Vec::with_capacity(vector.count_ones() as usize);
    let mut cursor = 0;
    while let Some(bit) = find_first_one(vector, cursor) {
        positions.push(bit);
        cursor = bit + 1;
    }
    positions
}
