//! Pool-free reference codec.
//!
//! Shift-and-mask conversions that return owned vectors. Slower than the
//! pooled path but with no allocator state; results match it byte for byte.

use crate::bytes_order::{WORD_BYTES, significant_len, word_count_for};

#[inline]
fn byte_at(words: &[u64], index: usize) -> u8 {
    (words[index / WORD_BYTES] >> (8 * (index % WORD_BYTES))) as u8
}

/// Encodes `words` as trimmed little-endian bytes.
pub fn to_bytes_le(words: &[u64]) -> Vec<u8> {
    (0..significant_len(words))
        .map(|i| byte_at(words, i))
        .collect()
}

/// Encodes `words` as trimmed big-endian bytes.
pub fn to_bytes_be(words: &[u64]) -> Vec<u8> {
    (0..significant_len(words))
        .rev()
        .map(|i| byte_at(words, i))
        .collect()
}

/// Decodes little-endian `bytes` into `ceil(len / 8)` words.
pub fn from_bytes_le(bytes: &[u8]) -> Vec<u64> {
    let mut words = vec![0u64; word_count_for(bytes.len())];
    for (i, &byte) in bytes.iter().enumerate() {
        words[i / WORD_BYTES] |= u64::from(byte) << (8 * (i % WORD_BYTES));
    }
    words
}

/// Decodes big-endian `bytes` into `ceil(len / 8)` words.
pub fn from_bytes_be(bytes: &[u8]) -> Vec<u64> {
    let mut words = vec![0u64; word_count_for(bytes.len())];
    for (i, &byte) in bytes.iter().rev().enumerate() {
        words[i / WORD_BYTES] |= u64::from(byte) << (8 * (i % WORD_BYTES));
    }
    words
}
