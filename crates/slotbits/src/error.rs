//! Error types for slotbits operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// A wire bitset had the wrong number of significant characters.
    #[error("Invalid bitset length: expected {expected} chars, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid bitset character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("Invalid time unit: {0} (must be 1..=1440 minutes)")]
    InvalidTimeUnit(u32),

    /// A packed word array did not match the word count of its time unit.
    #[error("Invalid word count: expected {expected} words, got {actual}")]
    WordCount { expected: usize, actual: usize },

    #[error("Time unit mismatch: {left} vs {right} minutes")]
    TimeUnitMismatch { left: u32, right: u32 },

    #[error("Sequence shape mismatch: {vectors} vectors, {durations} durations")]
    SequenceShape { vectors: usize, durations: usize },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
