//! The packed day-vector and its word-level set operations.
//!
//! A [`DayVector`] holds one bit per time unit of a 1440-minute day, `1` for
//! free and `0` for busy, packed most-significant-bit first into [`Word`]s.
//! Bits past the end of the day inside the last word are padding and are kept
//! at zero by every constructor and mutator in this crate.

use serde::{Deserialize, Serialize};

use crate::config::TimeUnit;
use crate::error::{Result, SlotError};
use crate::mask::{bit_mask, span_mask, Word, ALL_ONES, LEFT_MASK, WORD_BITS};

/// A bitset as it arrives from the outside: wire text or already-packed words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BitsetInput {
    Text(String),
    Words(Vec<Word>),
}

impl From<&str> for BitsetInput {
    fn from(text: &str) -> Self {
        BitsetInput::Text(text.to_string())
    }
}

impl From<String> for BitsetInput {
    fn from(text: String) -> Self {
        BitsetInput::Text(text)
    }
}

impl From<Vec<Word>> for BitsetInput {
    fn from(words: Vec<Word>) -> Self {
        BitsetInput::Words(words)
    }
}

/// Free/busy state of one resource for one day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayVector {
    words: Vec<Word>,
    time_unit: TimeUnit,
}

impl DayVector {
    /// A fresh all-busy vector.
    pub fn busy(time_unit: TimeUnit) -> Self {
        DayVector {
            words: vec![0; time_unit.words()],
            time_unit,
        }
    }

    /// A fresh all-free vector (padding stays busy).
    pub fn free(time_unit: TimeUnit) -> Self {
        let mut v = DayVector {
            words: vec![ALL_ONES; time_unit.words()],
            time_unit,
        };
        v.clear_padding();
        v
    }

    /// Wrap already-packed words. Padding bits are cleared.
    pub fn from_words(words: Vec<Word>, time_unit: TimeUnit) -> Result<Self> {
        let expected = time_unit.words();
        if words.len() != expected {
            return Err(SlotError::WordCount {
                expected,
                actual: words.len(),
            });
        }
        let mut v = DayVector { words, time_unit };
        v.clear_padding();
        Ok(v)
    }

    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    #[inline]
    pub fn time_unit(&self) -> TimeUnit {
        self.time_unit
    }

    /// Number of significant bits.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.time_unit.bits()
    }

    /// Value of bit `bit`; bits past the end of the day read as busy.
    #[inline]
    pub fn get(&self, bit: usize) -> bool {
        bit < self.bit_len() && self.words[bit / WORD_BITS] & bit_mask(bit % WORD_BITS) != 0
    }

    /// Set bit `bit` to `free`. Out-of-range bits are ignored.
    pub fn set(&mut self, bit: usize, free: bool) {
        if bit >= self.bit_len() {
            return;
        }
        let mask = bit_mask(bit % WORD_BITS);
        if free {
            self.words[bit / WORD_BITS] |= mask;
        } else {
            self.words[bit / WORD_BITS] &= !mask;
        }
    }

    /// Population count: number of free bits.
    pub fn count_ones(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    pub fn is_busy(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Mark `len` bits starting at `start` as free, one word at a time.
    ///
    /// The range is clamped to the end of the day.
    pub fn fill_ones(&mut self, start: usize, len: usize) {
        let end = start.saturating_add(len).min(self.bit_len());
        let mut bit = start;
        while bit < end {
            let from = bit % WORD_BITS;
            let take = (WORD_BITS - from).min(end - bit);
            self.words[bit / WORD_BITS] |= span_mask(from, take);
            bit += take;
        }
    }

    /// Bitwise intersection: free only where both are free.
    pub fn and(&self, other: &DayVector) -> Result<DayVector> {
        self.zip_with(other, |a, b| a & b)
    }

    /// Bitwise union: free where either is free.
    pub fn or(&self, other: &DayVector) -> Result<DayVector> {
        self.zip_with(other, |a, b| a | b)
    }

    /// In-place intersection with a vector of the same time unit.
    pub(crate) fn and_assign(&mut self, other: &DayVector) -> Result<()> {
        self.check_compatible(other)?;
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a &= *b;
        }
        Ok(())
    }

    pub(crate) fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    pub(crate) fn check_compatible(&self, other: &DayVector) -> Result<()> {
        if self.time_unit != other.time_unit {
            return Err(SlotError::TimeUnitMismatch {
                left: self.time_unit.minutes(),
                right: other.time_unit.minutes(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &DayVector, op: impl Fn(Word, Word) -> Word) -> Result<DayVector> {
        self.check_compatible(other)?;
        let words = self
            .words
            .iter()
            .zip(&other.words)
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(DayVector {
            words,
            time_unit: self.time_unit,
        })
    }

    /// Zero the bits of the last word that lie past the end of the day.
    pub(crate) fn clear_padding(&mut self) {
        let tail = self.bit_len() % WORD_BITS;
        if tail != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= LEFT_MASK[tail];
            }
        }
    }
}
