//! Byte order primitives.
//!
//! Pure, allocation-free helpers shared by the encoder and decoder. They work
//! on byte views already laid out in the target interpretation, so the host
//! CPU's endianness never leaks into results.

/// Width of a word in bytes.
pub const WORD_BYTES: usize = 8;

/// Byte order of an encoded magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// `byte[0]` is the least significant byte.
    Little,
    /// `byte[0]` is the most significant byte.
    Big,
}

/// Number of most-significant zero bytes in `word` (`0..=8`).
#[inline]
pub fn leading_zero_bytes(word: u64) -> usize {
    (word.leading_zeros() / 8) as usize
}

/// Reverses `bytes` in place.
///
/// The middle byte of an odd-length slice is left alone.
#[inline]
pub fn reverse_in_place(bytes: &mut [u8]) {
    let len = bytes.len();
    let half = len / 2;

    let (front, rest) = bytes.split_at_mut(half);
    let back = &mut rest[len - 2 * half..];

    for i in 0..half {
        std::mem::swap(&mut front[i], &mut back[half - 1 - i]);
    }
}

/// Trimmed byte length of a little-endian word sequence.
///
/// Only the high zero bytes of the last (most significant) word are trimmed.
#[inline]
pub fn significant_len(words: &[u64]) -> usize {
    match words.last() {
        Some(&tail) => words.len() * WORD_BYTES - leading_zero_bytes(tail),
        None => 0,
    }
}

/// Words needed to hold `byte_len` bytes.
#[inline]
pub fn word_count_for(byte_len: usize) -> usize {
    byte_len.div_ceil(WORD_BYTES)
}

/// High-order zero bytes needed to pad `byte_len` bytes to a word boundary.
#[inline]
pub fn padding_for(byte_len: usize) -> usize {
    (WORD_BYTES - byte_len % WORD_BYTES) % WORD_BYTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_zero_bytes() {
        assert_eq!(leading_zero_bytes(0), 8);
        assert_eq!(leading_zero_bytes(1), 7);
        assert_eq!(leading_zero_bytes(0xff), 7);
        assert_eq!(leading_zero_bytes(0x100), 6);
        assert_eq!(leading_zero_bytes(0x00ff_ffff_ffff_ffff), 1);
        assert_eq!(leading_zero_bytes(0x0100_0000_0000_0000), 0);
        assert_eq!(leading_zero_bytes(u64::MAX), 0);
    }

    #[test]
    fn test_reverse_even() {
        let mut bytes = [1u8, 2, 3, 4];
        reverse_in_place(&mut bytes);
        assert_eq!(bytes, [4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_odd() {
        let mut bytes = [1u8, 2, 3, 4, 5];
        reverse_in_place(&mut bytes);
        assert_eq!(bytes, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_trivial() {
        let mut empty: [u8; 0] = [];
        reverse_in_place(&mut empty);

        let mut one = [9u8];
        reverse_in_place(&mut one);
        assert_eq!(one, [9]);
    }

    #[test]
    fn test_reverse_matches_std() {
        for len in 0..40usize {
            let mut ours: Vec<u8> = (0..len as u8).collect();
            let mut expected = ours.clone();
            reverse_in_place(&mut ours);
            expected.reverse();
            assert_eq!(ours, expected, "len {}", len);
        }
    }

    #[test]
    fn test_significant_len() {
        assert_eq!(significant_len(&[]), 0);
        assert_eq!(significant_len(&[0]), 0);
        assert_eq!(significant_len(&[1]), 1);
        assert_eq!(significant_len(&[u64::MAX]), 8);
        assert_eq!(significant_len(&[0, 1]), 9);
        // A leading zero word is not trimmed beyond its own bytes.
        assert_eq!(significant_len(&[1, 0]), 8);
    }

    #[test]
    fn test_word_count_and_padding() {
        assert_eq!((word_count_for(0), padding_for(0)), (0, 0));
        assert_eq!((word_count_for(3), padding_for(3)), (1, 5));
        assert_eq!((word_count_for(8), padding_for(8)), (1, 0));
        assert_eq!((word_count_for(9), padding_for(9)), (2, 7));
        assert_eq!((word_count_for(16), padding_for(16)), (2, 0));
    }
}
