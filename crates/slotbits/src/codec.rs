//! Wire text ⇄ packed [`DayVector`] conversion.
//!
//! The wire format is a string of `'0'`/`'1'` characters, one per time unit,
//! optionally split into groups with `.` for readability. Character order is
//! reversed relative to time: the **last** character is bit 0 (00:00) and the
//! first character is the last unit of the day. Producers of this format rely
//! on that order, so [`decode`] and [`encode`] must agree with it bit for bit.

use std::fmt;

use crate::config::TimeUnit;
use crate::error::{Result, SlotError};
use crate::mask::{bit_mask, WORD_BITS};
use crate::vector::{BitsetInput, DayVector};

/// Group separator written by [`encode`] and stripped by [`decode`].
pub const SEPARATOR: char = '.';

#[inline]
fn is_separator(ch: char) -> bool {
    ch == SEPARATOR || ch.is_ascii_whitespace()
}

/// Decode wire text into a day-vector for `time_unit`.
///
/// Separators are ignored. The number of remaining characters must equal
/// `time_unit.bits()` exactly; anything else is rejected rather than padded
/// or truncated.
pub fn decode(text: &str, time_unit: TimeUnit) -> Result<DayVector> {
    let bits = time_unit.bits();
    let significant: Vec<(usize, char)> = text
        .chars()
        .enumerate()
        .filter(|(_, ch)| !is_separator(*ch))
        .collect();

    if significant.len() != bits {
        return Err(SlotError::InvalidLength {
            expected: bits,
            actual: significant.len(),
        });
    }

    let mut vector = DayVector::busy(time_unit);
    let words = vector.words_mut();
    for (index, &(position, ch)) in significant.iter().enumerate().rev() {
        match ch {
            '1' => {
                let bit = bits - 1 - index;
                words[bit / WORD_BITS] |= bit_mask(bit % WORD_BITS);
            }
            '0' => {}
            other => return Err(SlotError::InvalidCharacter { ch: other, position }),
        }
    }

    Ok(vector)
}

/// Resolve either input representation into a day-vector.
///
/// Packed words are taken as they are (after a word-count check); text goes
/// through [`decode`].
pub fn prepare(input: &BitsetInput, time_unit: TimeUnit) -> Result<DayVector> {
    match input {
        BitsetInput::Text(text) => decode(text, time_unit),
        BitsetInput::Words(words) => DayVector::from_words(words.clone(), time_unit),
    }
}

/// Encode a day-vector back into wire text.
///
/// With `separator` set, one group is emitted per packed word, so the text
/// reads as the words in reverse order. `decode(&encode(v, _), unit) == v`.
pub fn encode(vector: &DayVector, separator: Option<char>) -> String {
    let bits = vector.bit_len();
    let mut out = String::with_capacity(bits + vector.words().len());
    for bit in (0..bits).rev() {
        if let Some(sep) = separator {
            if bit != bits - 1 && (bit + 1) % WORD_BITS == 0 {
                out.push(sep);
            }
        }
        out.push(if vector.get(bit) { '1' } else { '0' });
    }
    out
}

/// Chronological diagnostic rendering: bit 0 first, one `.`-separated group
/// per word. This is **not** wire order; use [`encode`] for that.
impl fmt::Display for DayVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in 0..self.bit_len() {
            if bit != 0 && bit % WORD_BITS == 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", if self.get(bit) { '1' } else { '0' })?;
        }
        Ok(())
    }
}
