//! bigbytes
//!
//! Fast conversion between arbitrary-precision integer words and byte buffers.
//!
//! `bigbytes` turns a magnitude stored as 64-bit words (least significant
//! first) into a trimmed little-endian or big-endian byte sequence, and turns
//! arbitrary byte sequences back into words. It is the bridge a managed
//! runtime's integer type needs for:
//!
//! - binary codecs and wire formats
//! - hashing
//! - key derivation and storage
//!
//! The crate intentionally:
//! - does NOT do arithmetic
//! - does NOT encode a sign (magnitude only)
//! - does NOT keep global state
//!
//! Encoded output is a zero-copy [`bytes::Bytes`] view into a shared pool
//! that amortizes allocation across many small conversions. Decoding borrows
//! aligned input in place and otherwise assembles words in stack scratch.
//!
//! # Encode
//!
//! ```
//! use bigbytes::Codec;
//!
//! let mut codec = Codec::default();
//!
//! assert!(codec.to_bytes_le(&[0])?.is_empty());
//! assert_eq!(&codec.to_bytes_le(&[1])?[..], &[0x01]);
//! assert_eq!(&codec.to_bytes_be(&[0x0102])?[..], &[0x01, 0x02]);
//! # Ok::<(), bigbytes::CodecError>(())
//! ```
//!
//! # Decode
//!
//! ```
//! assert_eq!(&bigbytes::from_bytes_le(&[1, 2, 3])[..], &[0x0003_0201]);
//! assert_eq!(&bigbytes::from_bytes_be(&[1, 2, 3])[..], &[0x0001_0203]);
//! ```
//!
//! # Host exports (feature = "memory-host")
//!
//! ```
//! use bigbytes::{Codec, MemoryHost, Value, exports};
//!
//! let mut codec = Codec::default();
//! let mut host = MemoryHost::new();
//!
//! let bytes = exports::dispatch("toBytesBE", &mut codec, &mut host, &[Value::bigint([0x0a0b])])?;
//! assert_eq!(bytes.as_bytes().map(|b| &b[..]), Some(&[0x0a, 0x0b][..]));
//! # Ok::<(), bigbytes::CodecError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod bytes_order;
mod codec;
mod config;
mod error;
mod host;

//
// Public surface
//

pub use buffer::{
    Arena, BufferProvider, HeapProvider, INLINE_SCRATCH_WORDS, PoolAllocator, PoolStats,
    ScratchWords, WordBuffer,
};
pub use bytes_order::{
    ByteOrder, WORD_BYTES, leading_zero_bytes, padding_for, reverse_in_place, significant_len,
    word_count_for,
};
pub use codec::{
    Codec, Words, from_bytes_be, from_bytes_le, portable, with_words_be, with_words_le,
};
pub use config::{CodecConfig, DEFAULT_POOL_WORDS};
pub use error::{CodecError, Result, abort_on_fatal};
pub use host::{Host, exports};

#[cfg(feature = "memory-host")]
pub use host::{MemoryHost, Value};
