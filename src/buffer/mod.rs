//! Buffer management.
//!
//! - [`PoolAllocator`] - Bump allocation of encode buffers from a shared pool
//! - [`BufferProvider`] - Host service supplying backing storage
//! - Decode scratch: inline words with heap spill

mod pool;
mod provider;
pub(crate) mod scratch;

pub use pool::{Arena, PoolAllocator, PoolStats, WordBuffer};
pub use provider::{BufferProvider, HeapProvider};
pub use scratch::{INLINE_SCRATCH_WORDS, ScratchWords};
