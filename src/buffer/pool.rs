//! Bump-pointer pool allocator for encode buffers.

use bytes::{Bytes, BytesMut};

use super::provider::{BufferProvider, HeapProvider};
use crate::bytes_order::WORD_BYTES;
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};

/// Where a [`WordBuffer`]'s memory lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arena {
    /// Carved from the shared pool with this generation id.
    Pool {
        /// Generation of the pool, bumped on every rotation.
        id: u64,
    },
    /// A buffer sized for this request alone.
    Dedicated,
}

/// Allocation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Pools requested from the provider.
    pub rotations: u64,
    /// Requests served from a pool.
    pub pooled: u64,
    /// Requests served by a dedicated buffer.
    pub dedicated: u64,
}

/// A word-sized allocation handed out by [`PoolAllocator`].
///
/// The buffer shares ownership of its backing memory, so it stays valid after
/// the pool it came from has been rotated out.
#[derive(Debug)]
pub struct WordBuffer {
    data: BytesMut,
    arena: Arena,
    byte_offset: usize,
}

impl WordBuffer {
    /// Number of words this buffer holds.
    pub fn word_count(&self) -> usize {
        self.data.len() / WORD_BYTES
    }

    /// Length in bytes.
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// Returns true for a zero-word buffer.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Byte position of this buffer within its owner.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// The arena backing this buffer.
    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// Returns true if this buffer was carved from the shared pool.
    pub fn is_pooled(&self) -> bool {
        matches!(self.arena, Arena::Pool { .. })
    }

    /// Byte view of the buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable byte view of the buffer.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Writes `words` little-endian from the start of the buffer.
    ///
    /// Panics if `words` does not fit.
    pub fn write_words(&mut self, words: &[u64]) {
        assert!(
            words.len() <= self.word_count(),
            "{} words do not fit a {}-word buffer",
            words.len(),
            self.word_count()
        );
        for (dst, word) in self.data.chunks_exact_mut(WORD_BYTES).zip(words) {
            dst.copy_from_slice(&word.to_le_bytes());
        }
    }

    /// Reads word `index` back as little-endian.
    pub fn word(&self, index: usize) -> u64 {
        let start = index * WORD_BYTES;
        let mut word = [0u8; WORD_BYTES];
        word.copy_from_slice(&self.data[start..start + WORD_BYTES]);
        u64::from_le_bytes(word)
    }

    /// Freezes the first `len` bytes into an immutable, zero-copy view.
    pub fn freeze(mut self, len: usize) -> Bytes {
        debug_assert!(len <= self.data.len());
        self.data.truncate(len);
        self.data.freeze()
    }
}

/// Bump allocator over a shared, fixed-capacity pool.
///
/// Small requests (strictly below half the pool) are carved from the current
/// pool; when one would overflow it, the pool is replaced by a fresh one from
/// the provider. Large requests get a dedicated buffer and never touch the
/// pool offset.
///
/// # Example
///
/// ```
/// use bigbytes::{CodecConfig, PoolAllocator};
///
/// let mut alloc = PoolAllocator::new(CodecConfig::default());
/// let buf = alloc.allocate(2)?;
/// assert_eq!(buf.byte_len(), 16);
/// assert_eq!(alloc.offset(), 16);
/// # Ok::<(), bigbytes::CodecError>(())
/// ```
#[derive(Debug)]
pub struct PoolAllocator<P = HeapProvider> {
    provider: P,
    pool: Option<BytesMut>,
    capacity: usize,
    offset: usize,
    arena_id: u64,
    stats: PoolStats,
}

impl PoolAllocator<HeapProvider> {
    /// Creates an allocator backed by the heap.
    pub fn new(config: CodecConfig) -> Self {
        Self::with_provider(config, HeapProvider::new())
    }
}

impl<P: BufferProvider> PoolAllocator<P> {
    /// Creates an allocator backed by `provider`.
    ///
    /// No pool is requested until the first small allocation.
    pub fn with_provider(config: CodecConfig, provider: P) -> Self {
        Self {
            provider,
            pool: None,
            capacity: config.pool_bytes(),
            offset: 0,
            arena_id: 0,
            stats: PoolStats::default(),
        }
    }

    /// Allocates a buffer of `word_count` words.
    ///
    /// # Errors
    ///
    /// [`CodecError::ResourceExhausted`] if the provider cannot supply a pool
    /// or dedicated buffer, or if the byte size overflows.
    pub fn allocate(&mut self, word_count: usize) -> Result<WordBuffer> {
        let size = word_count
            .checked_mul(WORD_BYTES)
            .ok_or(CodecError::ResourceExhausted {
                requested: usize::MAX,
            })?;

        if size < self.half_pool() {
            self.allocate_pooled(size)
        } else {
            self.allocate_dedicated(size)
        }
    }

    fn allocate_pooled(&mut self, size: usize) -> Result<WordBuffer> {
        if self.pool.is_none() || self.offset + size > self.capacity {
            self.rotate()?;
        }

        let pool = self
            .pool
            .as_mut()
            .ok_or_else(|| CodecError::host("allocation pool missing after rotation"))?;

        let byte_offset = self.offset;
        let data = pool.split_to(size);
        self.offset += size;
        self.stats.pooled += 1;

        Ok(WordBuffer {
            data,
            arena: Arena::Pool { id: self.arena_id },
            byte_offset,
        })
    }

    fn allocate_dedicated(&mut self, size: usize) -> Result<WordBuffer> {
        let data = self.provide(size)?;
        self.stats.dedicated += 1;
        tracing::trace!(bytes = size, "dedicated buffer");

        Ok(WordBuffer {
            data,
            arena: Arena::Dedicated,
            byte_offset: 0,
        })
    }

    /// Replaces the current pool with a fresh one.
    ///
    /// Buffers already carved from the old pool keep it alive.
    fn rotate(&mut self) -> Result<()> {
        self.pool = None;
        self.offset = self.capacity;

        let pool = self.provide(self.capacity)?;

        self.pool = Some(pool);
        self.offset = 0;
        self.arena_id += 1;
        self.stats.rotations += 1;
        tracing::debug!(
            arena_id = self.arena_id,
            capacity = self.capacity,
            "rotated allocation pool"
        );
        Ok(())
    }

    fn provide(&mut self, size: usize) -> Result<BytesMut> {
        let data = self.provider.allocate(size).inspect_err(|err| {
            tracing::error!(bytes = size, error = %err, "buffer provider failed");
        })?;

        if data.len() != size {
            return Err(CodecError::host(format!(
                "buffer provider returned {} bytes for a {}-byte request",
                data.len(),
                size
            )));
        }
        Ok(data)
    }

    /// Bytes already handed out from the current pool.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Pool capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes left in the current pool (zero before the first pool exists).
    pub fn remaining(&self) -> usize {
        self.pool.as_ref().map_or(0, |pool| pool.len())
    }

    /// Requests with a byte size at or above this bypass the pool.
    pub fn half_pool(&self) -> usize {
        self.capacity / 2
    }

    /// Generation of the current pool (zero before the first pool exists).
    pub fn arena_id(&self) -> u64 {
        self.arena_id
    }

    /// Allocation counters.
    pub fn stats(&self) -> PoolStats {
        self.stats
    }

    /// The underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
