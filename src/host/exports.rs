//! Exported operations.
//!
//! Each operation takes exactly one host argument. Arity and type mismatches
//! are recoverable errors; host failures after validation are fatal.

use crate::buffer::scratch;
use crate::buffer::{BufferProvider, ScratchWords};
use crate::bytes_order::ByteOrder;
use crate::codec::Codec;
use crate::error::{CodecError, Result};

use super::Host;

/// Names of every exported operation.
pub const EXPORTS: [&str; 5] = [
    "toBytesLE",
    "toBytesBE",
    "fromBytesLE",
    "fromBytesBE",
    "wordLength",
];

/// Encodes an integer argument as trimmed little-endian bytes.
pub fn to_bytes_le<P: BufferProvider, H: Host>(
    codec: &mut Codec<P>,
    host: &mut H,
    args: &[H::Value],
) -> Result<H::Value> {
    encode_arg(codec, host, args, ByteOrder::Little)
}

/// Encodes an integer argument as trimmed big-endian bytes.
pub fn to_bytes_be<P: BufferProvider, H: Host>(
    codec: &mut Codec<P>,
    host: &mut H,
    args: &[H::Value],
) -> Result<H::Value> {
    encode_arg(codec, host, args, ByteOrder::Big)
}

/// Decodes a little-endian byte-sequence argument into a non-negative integer.
pub fn from_bytes_le<P: BufferProvider, H: Host>(
    codec: &mut Codec<P>,
    host: &mut H,
    args: &[H::Value],
) -> Result<H::Value> {
    decode_arg(codec, host, args, ByteOrder::Little)
}

/// Decodes a big-endian byte-sequence argument into a non-negative integer.
pub fn from_bytes_be<P: BufferProvider, H: Host>(
    codec: &mut Codec<P>,
    host: &mut H,
    args: &[H::Value],
) -> Result<H::Value> {
    decode_arg(codec, host, args, ByteOrder::Big)
}

/// Returns the number of magnitude words in an integer argument.
pub fn word_length<P: BufferProvider, H: Host>(
    _codec: &mut Codec<P>,
    host: &mut H,
    args: &[H::Value],
) -> Result<H::Value> {
    let value = single_arg(args)?;
    let count = host.integer_word_count(value)?;
    host.create_integer(false, &[count as u64])
}

/// Calls the export named `name`.
pub fn dispatch<P: BufferProvider, H: Host>(
    name: &str,
    codec: &mut Codec<P>,
    host: &mut H,
    args: &[H::Value],
) -> Result<H::Value> {
    let result = match name {
        "toBytesLE" => to_bytes_le(codec, host, args),
        "toBytesBE" => to_bytes_be(codec, host, args),
        "fromBytesLE" => from_bytes_le(codec, host, args),
        "fromBytesBE" => from_bytes_be(codec, host, args),
        "wordLength" => word_length(codec, host, args),
        _ => Err(CodecError::UnknownExport {
            name: name.to_string(),
        }),
    };

    if let Err(err) = &result {
        tracing::debug!(export = name, error = %err, fatal = err.is_fatal(), "export failed");
    }
    result
}

fn single_arg<V>(args: &[V]) -> Result<&V> {
    match args {
        [arg] => Ok(arg),
        _ => Err(CodecError::MissingArgs {
            expected: 1,
            actual: args.len(),
        }),
    }
}

fn extract_words<H: Host>(host: &H, value: &H::Value) -> Result<ScratchWords> {
    let count = host.integer_word_count(value)?;

    let mut words = scratch::zeroed(count);
    host.integer_words(value, &mut words).map_err(|err| {
        if err.is_fatal() {
            err
        } else {
            CodecError::host(format!("failed to get integer words: {}", err))
        }
    })?;
    Ok(words)
}

fn encode_arg<P: BufferProvider, H: Host>(
    codec: &mut Codec<P>,
    host: &mut H,
    args: &[H::Value],
    order: ByteOrder,
) -> Result<H::Value> {
    let value = single_arg(args)?;
    let words = extract_words(host, value)?;
    let bytes = codec.to_bytes(&words, order)?;
    host.create_byte_view(bytes)
}

fn decode_arg<P: BufferProvider, H: Host>(
    codec: &mut Codec<P>,
    host: &mut H,
    args: &[H::Value],
    order: ByteOrder,
) -> Result<H::Value> {
    let value = single_arg(args)?;
    let bytes = host.byte_sequence(value)?;
    let words = codec.from_bytes(bytes, order);
    host.create_integer(false, &words)
}
