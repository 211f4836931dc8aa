//! Word sequence to trimmed byte sequence.

use bytes::Bytes;

use crate::buffer::{BufferProvider, PoolAllocator};
use crate::bytes_order::{ByteOrder, WORD_BYTES, reverse_in_place, significant_len};
use crate::error::{CodecError, Result};

/// Encodes `words` into a zero-copy view of a pool allocation.
///
/// The allocation is filled little-endian, trimmed to the significant
/// length and, for [`ByteOrder::Big`], the trimmed prefix is reversed. The
/// zero padding past the significant length is never part of the reversal.
pub(crate) fn encode<P: BufferProvider>(
    allocator: &mut PoolAllocator<P>,
    words: &[u64],
    order: ByteOrder,
) -> Result<Bytes> {
    trace_leading_zero_words(words);

    let mut buf = allocator.allocate(words.len())?;
    buf.write_words(words);

    let len = significant_len(words);
    if order == ByteOrder::Big {
        reverse_in_place(&mut buf.as_bytes_mut()[..len]);
    }

    Ok(buf.freeze(len))
}

/// Encodes `words` into `out`, returning the significant length.
///
/// `out` must hold every word (`words.len() * 8` bytes) even though only the
/// returned prefix is meaningful; bytes past it are left as written.
pub(crate) fn encode_into(words: &[u64], out: &mut [u8], order: ByteOrder) -> Result<usize> {
    let needed = words.len() * WORD_BYTES;
    if out.len() < needed {
        return Err(CodecError::BufferTooSmall {
            needed,
            actual: out.len(),
        });
    }

    trace_leading_zero_words(words);

    for (dst, word) in out.chunks_exact_mut(WORD_BYTES).zip(words) {
        dst.copy_from_slice(&word.to_le_bytes());
    }

    let len = significant_len(words);
    if order == ByteOrder::Big {
        reverse_in_place(&mut out[..len]);
    }
    Ok(len)
}

/// Hosts are expected to strip leading zero words (except a sole zero);
/// only the top word's zero bytes are trimmed here.
fn trace_leading_zero_words(words: &[u64]) {
    if words.len() > 1 && words.last() == Some(&0) {
        tracing::trace!(
            words = words.len(),
            "word sequence carries leading zero words"
        );
    }
}
