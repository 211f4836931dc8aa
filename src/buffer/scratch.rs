//! Decode scratch storage.
//!
//! Up to [`INLINE_SCRATCH_WORDS`] words live inline (on the stack); larger
//! requests spill to the heap. Either way the storage is released when the
//! owning value drops.

use smallvec::SmallVec;

/// Words held inline before scratch spills to the heap.
pub const INLINE_SCRATCH_WORDS: usize = 32;

/// Word scratch storage.
pub type ScratchWords = SmallVec<[u64; INLINE_SCRATCH_WORDS]>;

/// Returns `word_count` zeroed words.
pub(crate) fn zeroed(word_count: usize) -> ScratchWords {
    let scratch = ScratchWords::from_elem(0, word_count);
    if scratch.spilled() {
        tracing::trace!(words = word_count, "decode scratch spilled to heap");
    }
    scratch
}

/// Byte view over the scratch words.
pub(crate) fn as_bytes_mut(scratch: &mut ScratchWords) -> &mut [u8] {
    bytemuck::cast_slice_mut(scratch.as_mut_slice())
}

/// Reinterprets words written through the byte view as little-endian.
///
/// A no-op on little-endian targets.
pub(crate) fn words_from_le(scratch: &mut ScratchWords) {
    if cfg!(target_endian = "big") {
        for word in scratch.iter_mut() {
            *word = u64::from_le(*word);
        }
    }
}
