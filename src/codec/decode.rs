//! Byte sequence to word sequence.

use std::ops::Deref;

use crate::buffer::ScratchWords;
use crate::buffer::scratch;
use crate::bytes_order::{padding_for, reverse_in_place, word_count_for};

/// A decoded word sequence, least significant word first.
///
/// Either borrowed straight from an aligned little-endian input or assembled
/// in scratch storage. Scratch is released when this value drops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Words<'a> {
    /// The input reinterpreted in place, no copy.
    Borrowed(&'a [u64]),
    /// Words assembled in scratch storage.
    Scratch(ScratchWords),
}

impl Words<'_> {
    /// Returns true if the input was reinterpreted without copying.
    pub fn is_borrowed(&self) -> bool {
        matches!(self, Words::Borrowed(_))
    }

    /// Returns true if scratch storage spilled to the heap.
    pub fn spilled(&self) -> bool {
        match self {
            Words::Borrowed(_) => false,
            Words::Scratch(scratch) => scratch.spilled(),
        }
    }

    /// Copies the words into an owned vector.
    pub fn into_vec(self) -> Vec<u64> {
        match self {
            Words::Borrowed(words) => words.to_vec(),
            Words::Scratch(scratch) => scratch.into_vec(),
        }
    }
}

impl Deref for Words<'_> {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        match self {
            Words::Borrowed(words) => *words,
            Words::Scratch(scratch) => scratch.as_slice(),
        }
    }
}

impl AsRef<[u64]> for Words<'_> {
    fn as_ref(&self) -> &[u64] {
        self
    }
}

/// Decodes little-endian `bytes` into `ceil(len / 8)` words.
///
/// An 8-byte aligned input whose length is a multiple of 8 is borrowed as-is
/// on little-endian targets. Anything else is zero-extended in scratch.
///
/// # Example
///
/// ```
/// let words = bigbytes::from_bytes_le(&[0x01, 0x02, 0x03]);
/// assert_eq!(&words[..], &[0x0003_0201]);
/// ```
pub fn from_bytes_le(bytes: &[u8]) -> Words<'_> {
    if cfg!(target_endian = "little") {
        if let Ok(words) = bytemuck::try_cast_slice::<u8, u64>(bytes) {
            return Words::Borrowed(words);
        }
    }

    let mut scratch = scratch::zeroed(word_count_for(bytes.len()));
    scratch::as_bytes_mut(&mut scratch)[..bytes.len()].copy_from_slice(bytes);
    scratch::words_from_le(&mut scratch);
    Words::Scratch(scratch)
}

/// Decodes big-endian `bytes` into `ceil(len / 8)` words.
///
/// The input is placed after `(8 - len % 8) % 8` leading zero bytes and the
/// whole padded buffer is reversed into little-endian word order.
///
/// # Example
///
/// ```
/// let words = bigbytes::from_bytes_be(&[0x01, 0x02, 0x03]);
/// assert_eq!(&words[..], &[0x0001_0203]);
/// ```
pub fn from_bytes_be(bytes: &[u8]) -> Words<'static> {
    let padding = padding_for(bytes.len());
    let mut scratch = scratch::zeroed(word_count_for(bytes.len()));

    let buf = scratch::as_bytes_mut(&mut scratch);
    buf[padding..].copy_from_slice(bytes);
    reverse_in_place(buf);

    scratch::words_from_le(&mut scratch);
    Words::Scratch(scratch)
}

/// Decodes little-endian `bytes` and hands the words to `f`.
///
/// Scratch is released once `f` returns.
pub fn with_words_le<R>(bytes: &[u8], f: impl FnOnce(&[u64]) -> R) -> R {
    let words = from_bytes_le(bytes);
    f(&words)
}

/// Decodes big-endian `bytes` and hands the words to `f`.
///
/// Scratch is released once `f` returns.
pub fn with_words_be<R>(bytes: &[u8], f: impl FnOnce(&[u64]) -> R) -> R {
    let words = from_bytes_be(bytes);
    f(&words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_le_partial_word() {
        let words = from_bytes_le(&[0x01, 0x02, 0x03]);
        assert!(!words.is_borrowed());
        assert_eq!(&words[..], &[0x0000_0000_0003_0201]);
    }

    #[test]
    fn test_be_partial_word() {
        let words = from_bytes_be(&[0x01, 0x02, 0x03]);
        assert_eq!(&words[..], &[0x0000_0000_0001_0203]);
    }

    #[test]
    fn test_empty() {
        assert!(from_bytes_le(&[]).is_empty());
        assert!(from_bytes_be(&[]).is_empty());
    }

    #[test]
    fn test_be_exact_multiple_has_no_padding() {
        let bytes = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
        let words = from_bytes_be(&bytes);
        assert_eq!(
            &words[..],
            &[0x090a_0b0c_0d0e_0f10, 0x0102_0304_0506_0708]
        );
    }

    #[test]
    fn test_be_nine_bytes() {
        let bytes = [0xff, 1, 2, 3, 4, 5, 6, 7, 8];
        let words = from_bytes_be(&bytes);
        assert_eq!(&words[..], &[0x0102_0304_0506_0708, 0xff]);
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn test_le_aligned_borrows() {
        let backing = [0x0102_0304_0506_0708u64, 42];
        let bytes: &[u8] = bytemuck::cast_slice(&backing);

        let words = from_bytes_le(bytes);
        assert!(words.is_borrowed());
        assert!(!words.spilled());
        assert_eq!(&words[..], &backing);
    }

    #[test]
    fn test_le_misaligned_copies() {
        let backing = [0u64; 3];
        let bytes: &[u8] = bytemuck::cast_slice(&backing);

        // Offset by one: never 8-byte aligned.
        let words = from_bytes_le(&bytes[1..17]);
        assert!(!words.is_borrowed());
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_large_input_spills() {
        let bytes = vec![0xabu8; 33 * 8 + 1];
        let words = from_bytes_be(&bytes);
        assert_eq!(words.len(), 34);
        assert!(words.spilled());
        assert_eq!(words[33], 0xab);
        assert!(words[..33].iter().all(|&w| w == u64::MAX / 0xff * 0xab));
    }

    #[test]
    fn test_with_words() {
        let sum: u64 = with_words_le(&[1, 0, 0, 0, 0, 0, 0, 0, 2], |w| w.iter().sum());
        assert_eq!(sum, 3);

        let first = with_words_be(&[1, 2], |w| w[0]);
        assert_eq!(first, 0x0102);
    }

    #[test]
    fn test_into_vec() {
        assert_eq!(from_bytes_be(&[7]).into_vec(), vec![7]);
    }
}
