//! Word masks shared by every range operation.
//!
//! Words are packed most-significant-bit first: chronological bit `i` of a
//! word lives at position `WORD_BITS - 1 - i`. `LEFT_MASK[k]` therefore covers
//! the first `k` chronological bits of a word and `RIGHT_MASK[k]` the last `k`.

/// Packed storage word of a day-vector.
pub type Word = u32;

pub const WORD_BITS: usize = Word::BITS as usize;

pub const ALL_ONES: Word = Word::MAX;

/// `LEFT_MASK[k]`: the `k` most-significant bits set, `k` in `0..=WORD_BITS`.
pub const LEFT_MASK: [Word; WORD_BITS + 1] = build_left();

/// `RIGHT_MASK[k]`: the `k` least-significant bits set, `k` in `0..=WORD_BITS`.
pub const RIGHT_MASK: [Word; WORD_BITS + 1] = build_right();

const fn build_left() -> [Word; WORD_BITS + 1] {
    let mut table = [0; WORD_BITS + 1];
    let mut k = 1;
    while k <= WORD_BITS {
        table[k] = ALL_ONES << (WORD_BITS - k);
        k += 1;
    }
    table
}

const fn build_right() -> [Word; WORD_BITS + 1] {
    let mut table = [0; WORD_BITS + 1];
    let mut k = 1;
    while k <= WORD_BITS {
        table[k] = ALL_ONES >> (WORD_BITS - k);
        k += 1;
    }
    table
}

/// Mask of chronological bits `[from, from + len)` inside a single word.
#[inline]
pub fn span_mask(from: usize, len: usize) -> Word {
    debug_assert!(from + len <= WORD_BITS);
    LEFT_MASK[from + len] & RIGHT_MASK[WORD_BITS - from]
}

/// Position-in-word mask for chronological bit `bit` (`0..WORD_BITS`).
#[inline]
pub fn bit_mask(bit: usize) -> Word {
    1 << (WORD_BITS - 1 - bit)
}
