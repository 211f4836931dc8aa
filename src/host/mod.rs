//! Host runtime boundary.
//!
//! - [`Host`] - Integer extraction/construction and byte views
//! - [`exports`] - The exported operations with argument validation
//! - [`MemoryHost`] - In-memory reference host (feature `memory-host`)

pub mod exports;
#[cfg(feature = "memory-host")]
mod memory;

#[cfg(feature = "memory-host")]
pub use memory::{MemoryHost, Value};

use bytes::Bytes;

use crate::error::Result;

/// Services the codec needs from the host runtime.
///
/// Word extraction is two-phase: [`integer_word_count`] sizes the buffer,
/// then [`integer_words`] fills it. Sign is reported but never encoded.
///
/// [`integer_word_count`]: Host::integer_word_count
/// [`integer_words`]: Host::integer_words
pub trait Host {
    /// A host value.
    type Value;

    /// Number of magnitude words in an integer value.
    ///
    /// Fails with [`CodecError::InvalidArgType`](crate::CodecError::InvalidArgType)
    /// if `value` is not an integer.
    fn integer_word_count(&self, value: &Self::Value) -> Result<usize>;

    /// Fills `out` (exactly the reported word count) with the magnitude words
    /// and returns the sign bit.
    fn integer_words(&self, value: &Self::Value, out: &mut [u64]) -> Result<bool>;

    /// Byte contents of a byte-sequence value.
    ///
    /// Fails with [`CodecError::InvalidArgType`](crate::CodecError::InvalidArgType)
    /// if `value` is not a byte sequence.
    fn byte_sequence<'a>(&self, value: &'a Self::Value) -> Result<&'a [u8]>;

    /// Wraps a zero-copy byte view as a host value.
    fn create_byte_view(&mut self, bytes: Bytes) -> Result<Self::Value>;

    /// Constructs an integer from magnitude words.
    fn create_integer(&mut self, negative: bool, words: &[u64]) -> Result<Self::Value>;
}
