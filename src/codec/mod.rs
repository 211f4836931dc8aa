//! Word/byte codec.
//!
//! - [`Codec`] - Pooled encoder plus decoders
//! - [`Words`] - Decoded words, borrowed or in scratch
//! - [`portable`] - Pool-free reference implementation

mod decode;
mod encode;
pub mod portable;

pub use decode::{Words, from_bytes_be, from_bytes_le, with_words_be, with_words_le};

use bytes::Bytes;

use crate::buffer::{BufferProvider, HeapProvider, PoolAllocator};
use crate::bytes_order::ByteOrder;
use crate::config::CodecConfig;
use crate::error::Result;

/// Converts word sequences to trimmed byte sequences and back.
///
/// Encoded output is a zero-copy [`Bytes`] view into memory handed out by
/// the codec's [`PoolAllocator`]. Each view keeps its backing memory alive,
/// so views stay valid no matter how many conversions follow.
///
/// A `Codec` is single-threaded state; keep one per thread.
///
/// # Example
///
/// ```
/// use bigbytes::Codec;
///
/// let mut codec = Codec::default();
///
/// let le = codec.to_bytes_le(&[0x0102_0304])?;
/// assert_eq!(&le[..], &[0x04, 0x03, 0x02, 0x01]);
///
/// let be = codec.to_bytes_be(&[0x0102_0304])?;
/// assert_eq!(&be[..], &[0x01, 0x02, 0x03, 0x04]);
///
/// let words = codec.from_bytes_be(&be);
/// assert_eq!(&words[..], &[0x0102_0304]);
/// # Ok::<(), bigbytes::CodecError>(())
/// ```
#[derive(Debug)]
pub struct Codec<P = HeapProvider> {
    allocator: PoolAllocator<P>,
    config: CodecConfig,
}

impl Codec<HeapProvider> {
    /// Creates a codec whose pools come from the heap.
    pub fn new(config: CodecConfig) -> Self {
        Self::with_provider(config, HeapProvider::new())
    }
}

impl<P: BufferProvider> Codec<P> {
    /// Creates a codec whose pools come from `provider`.
    pub fn with_provider(config: CodecConfig, provider: P) -> Self {
        Self {
            allocator: PoolAllocator::with_provider(config, provider),
            config,
        }
    }

    /// Encodes `words` as trimmed little-endian bytes.
    ///
    /// `[]` and `[0]` both encode to an empty view.
    pub fn to_bytes_le(&mut self, words: &[u64]) -> Result<Bytes> {
        self.to_bytes(words, ByteOrder::Little)
    }

    /// Encodes `words` as trimmed big-endian bytes.
    pub fn to_bytes_be(&mut self, words: &[u64]) -> Result<Bytes> {
        self.to_bytes(words, ByteOrder::Big)
    }

    /// Encodes `words` in the given byte order.
    ///
    /// # Errors
    ///
    /// [`CodecError::ResourceExhausted`](crate::CodecError::ResourceExhausted)
    /// if the buffer provider cannot supply memory.
    pub fn to_bytes(&mut self, words: &[u64], order: ByteOrder) -> Result<Bytes> {
        encode::encode(&mut self.allocator, words, order)
    }

    /// Encodes `words` little-endian into `out`, returning the trimmed length.
    pub fn to_bytes_le_into(&self, words: &[u64], out: &mut [u8]) -> Result<usize> {
        encode::encode_into(words, out, ByteOrder::Little)
    }

    /// Encodes `words` big-endian into `out`, returning the trimmed length.
    pub fn to_bytes_be_into(&self, words: &[u64], out: &mut [u8]) -> Result<usize> {
        encode::encode_into(words, out, ByteOrder::Big)
    }

    /// Encodes `words` into `out` in the given byte order.
    ///
    /// `out` must hold `words.len() * 8` bytes; only the returned prefix is
    /// meaningful.
    ///
    /// # Errors
    ///
    /// [`CodecError::BufferTooSmall`](crate::CodecError::BufferTooSmall) if
    /// `out` is too short.
    pub fn to_bytes_into(&self, words: &[u64], out: &mut [u8], order: ByteOrder) -> Result<usize> {
        encode::encode_into(words, out, order)
    }

    /// Decodes little-endian bytes. See [`from_bytes_le`].
    pub fn from_bytes_le<'a>(&self, bytes: &'a [u8]) -> Words<'a> {
        from_bytes_le(bytes)
    }

    /// Decodes big-endian bytes. See [`from_bytes_be`].
    pub fn from_bytes_be(&self, bytes: &[u8]) -> Words<'static> {
        from_bytes_be(bytes)
    }

    /// Decodes bytes in the given byte order.
    pub fn from_bytes<'a>(&self, bytes: &'a [u8], order: ByteOrder) -> Words<'a> {
        match order {
            ByteOrder::Little => from_bytes_le(bytes),
            ByteOrder::Big => from_bytes_be(bytes),
        }
    }

    /// The allocator backing encoded output.
    pub fn allocator(&self) -> &PoolAllocator<P> {
        &self.allocator
    }

    /// Returns the configuration used by this codec.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}

impl Default for Codec<HeapProvider> {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let codec = Codec::default();
        assert_eq!(codec.config().pool_words(), 1024);
        assert_eq!(codec.allocator().capacity(), 8192);
    }

    #[test]
    fn test_round_trip_both_orders() {
        let mut codec = Codec::default();
        let words = [0xdead_beef_u64, 0x0123_4567_89ab_cdef, 0x7f];

        for order in [ByteOrder::Little, ByteOrder::Big] {
            let bytes = codec.to_bytes(&words, order).unwrap();
            assert_eq!(bytes.len(), 17);
            assert_eq!(&codec.from_bytes(&bytes, order)[..], &words);
        }
    }

    #[test]
    fn test_views_share_pool() {
        let mut codec = Codec::default();
        let _a = codec.to_bytes_le(&[1, 2]).unwrap();
        let _b = codec.to_bytes_le(&[3]).unwrap();
        assert_eq!(codec.allocator().offset(), 24);
        assert_eq!(codec.allocator().stats().rotations, 1);
    }

    #[test]
    fn test_into_matches_pooled() {
        let mut codec = Codec::default();
        let words = [0x0102_0304_0506_0708u64, 0x0a0b];
        let mut out = [0u8; 16];

        let len = codec.to_bytes_be_into(&words, &mut out).unwrap();
        assert_eq!(&out[..len], &codec.to_bytes_be(&words).unwrap()[..]);

        let len = codec.to_bytes_le_into(&words, &mut out).unwrap();
        assert_eq!(&out[..len], &codec.to_bytes_le(&words).unwrap()[..]);
    }
}
