//! In-memory reference host.

use std::fmt;

use bytes::Bytes;

use super::Host;
use crate::error::{CodecError, Result};

/// A host value.
///
/// Integers are normalised on construction: leading zero words are dropped
/// and zero is never negative, matching how JS engines store bigints.
///
/// # Example
///
/// ```
/// use bigbytes::Value;
///
/// let value = Value::bigint([5, 0, 0]);
/// assert_eq!(value.as_words(), Some(&[5u64][..]));
/// assert_eq!(value.to_string(), "0x5n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An arbitrary-precision integer.
    BigInt {
        /// Sign bit.
        negative: bool,
        /// Magnitude words, least significant first.
        words: Vec<u64>,
    },
    /// A byte sequence.
    Bytes(Bytes),
    /// A string.
    Text(String),
    /// No value.
    Undefined,
}

impl Value {
    /// Creates a non-negative integer.
    pub fn bigint(words: impl Into<Vec<u64>>) -> Self {
        Self::signed_bigint(false, words)
    }

    /// Creates an integer with a sign.
    pub fn signed_bigint(negative: bool, words: impl Into<Vec<u64>>) -> Self {
        let mut words = words.into();
        while words.last() == Some(&0) {
            words.pop();
        }
        Value::BigInt {
            negative: negative && !words.is_empty(),
            words,
        }
    }

    /// Creates a byte sequence.
    pub fn bytes(data: impl Into<Bytes>) -> Self {
        Value::Bytes(data.into())
    }

    /// Magnitude words, if this is an integer.
    pub fn as_words(&self) -> Option<&[u64]> {
        match self {
            Value::BigInt { words, .. } => Some(words),
            _ => None,
        }
    }

    /// Byte contents, if this is a byte sequence.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// The host type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::BigInt { .. } => "bigint",
            Value::Bytes(_) => "Uint8Array",
            Value::Text(_) => "string",
            Value::Undefined => "undefined",
        }
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::bigint([n])
    }
}

impl From<u128> for Value {
    fn from(n: u128) -> Self {
        Value::bigint([n as u64, (n >> 64) as u64])
    }
}

impl From<Bytes> for Value {
    fn from(data: Bytes) -> Self {
        Value::Bytes(data)
    }
}

impl From<Vec<u8>> for Value {
    fn from(data: Vec<u8>) -> Self {
        Value::Bytes(data.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::BigInt { negative, words } => {
                if *negative {
                    write!(f, "-")?;
                }
                match words.split_last() {
                    None => write!(f, "0x0")?,
                    Some((top, rest)) => {
                        write!(f, "0x{:x}", top)?;
                        for word in rest.iter().rev() {
                            write!(f, "{:016x}", word)?;
                        }
                    }
                }
                write!(f, "n")
            }
            Value::Bytes(bytes) => write!(f, "Uint8Array({})", bytes.len()),
            Value::Text(text) => write!(f, "{:?}", text),
            Value::Undefined => write!(f, "undefined"),
        }
    }
}

/// Host backed by plain Rust values.
#[derive(Debug, Default)]
pub struct MemoryHost {
    views_created: usize,
    integers_created: usize,
}

impl MemoryHost {
    /// Creates a host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte views created so far.
    pub fn views_created(&self) -> usize {
        self.views_created
    }

    /// Integers created so far.
    pub fn integers_created(&self) -> usize {
        self.integers_created
    }
}

impl Host for MemoryHost {
    type Value = Value;

    fn integer_word_count(&self, value: &Value) -> Result<usize> {
        value
            .as_words()
            .map(<[u64]>::len)
            .ok_or(CodecError::InvalidArgType { expected: "bigint" })
    }

    fn integer_words(&self, value: &Value, out: &mut [u64]) -> Result<bool> {
        match value {
            Value::BigInt { negative, words } if words.len() == out.len() => {
                out.copy_from_slice(words);
                Ok(*negative)
            }
            Value::BigInt { words, .. } => Err(CodecError::host(format!(
                "expected a {}-word buffer, got {}",
                words.len(),
                out.len()
            ))),
            _ => Err(CodecError::InvalidArgType { expected: "bigint" }),
        }
    }

    fn byte_sequence<'a>(&self, value: &'a Value) -> Result<&'a [u8]> {
        value
            .as_bytes()
            .map(|bytes| &bytes[..])
            .ok_or(CodecError::InvalidArgType {
                expected: "Uint8Array",
            })
    }

    fn create_byte_view(&mut self, bytes: Bytes) -> Result<Value> {
        self.views_created += 1;
        Ok(Value::Bytes(bytes))
    }

    fn create_integer(&mut self, negative: bool, words: &[u64]) -> Result<Value> {
        self.integers_created += 1;
        Ok(Value::signed_bigint(negative, words))
    }
}
