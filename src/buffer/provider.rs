//! Backing storage provider for pools and dedicated buffers.

use bytes::BytesMut;

use crate::error::{CodecError, Result};

/// Supplies zero-initialised backing buffers.
///
/// This is the host's buffer service. Implementations must return a buffer
/// of exactly `byte_size` bytes or fail with
/// [`CodecError::ResourceExhausted`]; the allocator has no fallback.
pub trait BufferProvider {
    /// Allocates a buffer of `byte_size` bytes.
    fn allocate(&mut self, byte_size: usize) -> Result<BytesMut>;
}

impl<P: BufferProvider + ?Sized> BufferProvider for &mut P {
    fn allocate(&mut self, byte_size: usize) -> Result<BytesMut> {
        (**self).allocate(byte_size)
    }
}

/// Heap-backed provider with an optional budget.
///
/// The budget counts every byte ever handed out; once a request would push
/// the total past it, the request fails. Without a budget only requests no
/// allocator could satisfy (above `isize::MAX`) fail.
#[derive(Debug, Clone, Default)]
pub struct HeapProvider {
    limit: Option<usize>,
    allocated: usize,
}

impl HeapProvider {
    /// Creates an unbounded provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider that refuses to hand out more than `limit` bytes.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            allocated: 0,
        }
    }

    /// Total bytes handed out so far.
    pub fn allocated(&self) -> usize {
        self.allocated
    }
}

impl BufferProvider for HeapProvider {
    fn allocate(&mut self, byte_size: usize) -> Result<BytesMut> {
        let total = self
            .allocated
            .checked_add(byte_size)
            .filter(|&total| self.limit.is_none_or(|limit| total <= limit));

        match total {
            Some(total) if byte_size <= isize::MAX as usize => {
                self.allocated = total;
                Ok(BytesMut::zeroed(byte_size))
            }
            _ => Err(CodecError::ResourceExhausted {
                requested: byte_size,
            }),
        }
    }
}
