//! Configuration for the codec's pool allocator.
//!
//! - [`CodecConfig`] - Pool capacity and the derived pool/dedicated threshold
//!
//! # Example
//!
//! ```
//! use bigbytes::CodecConfig;
//!
//! // Default 8 KiB pool
//! let config = CodecConfig::default();
//! assert_eq!(config.pool_bytes(), 8192);
//!
//! // Larger pool
//! let config = CodecConfig::new(4096)?;
//! assert_eq!(config.half_pool_bytes(), 16384);
//!
//! # Ok::<(), bigbytes::CodecError>(())
//! ```

use crate::bytes_order::WORD_BYTES;
use crate::error::{CodecError, Result};

/// Default pool capacity in words (8 KiB).
pub const DEFAULT_POOL_WORDS: usize = 1024;

/// Configuration for a [`Codec`](crate::Codec).
///
/// Requests whose byte size is strictly below half of the pool capacity are
/// bump-allocated from the shared pool; anything larger gets a dedicated
/// buffer so one big integer cannot monopolise the pool.
///
/// # Constraints
///
/// `pool_words` must be:
/// - Non-zero
/// - Even (so the half-pool threshold is exact)
///
/// # Example
///
/// ```
/// use bigbytes::CodecConfig;
///
/// let config = CodecConfig::default().with_pool_words(256);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.pool_bytes(), 2048);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodecConfig {
    /// Pool capacity in 64-bit words.
    pool_words: usize,
}

impl CodecConfig {
    /// Creates a new configuration with a pool of `pool_words` words.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidConfig`] if `pool_words` is zero, odd,
    /// or too large to express in bytes.
    pub fn new(pool_words: usize) -> Result<Self> {
        if pool_words == 0 {
            return Err(CodecError::InvalidConfig {
                message: "pool size must be non-zero",
            });
        }

        if pool_words % 2 != 0 {
            return Err(CodecError::InvalidConfig {
                message: "pool size must be an even number of words",
            });
        }

        if pool_words.checked_mul(WORD_BYTES).is_none() {
            return Err(CodecError::InvalidConfig {
                message: "pool size overflows usize bytes",
            });
        }

        Ok(Self { pool_words })
    }

    /// Sets the pool capacity in words.
    pub fn with_pool_words(mut self, pool_words: usize) -> Self {
        self.pool_words = pool_words;
        self
    }

    /// Returns the pool capacity in words.
    pub fn pool_words(&self) -> usize {
        self.pool_words
    }

    /// Returns the pool capacity in bytes.
    pub fn pool_bytes(&self) -> usize {
        self.pool_words * WORD_BYTES
    }

    /// Returns the half-pool threshold in bytes.
    pub fn half_pool_bytes(&self) -> usize {
        self.pool_bytes() / 2
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<()> {
        Self::new(self.pool_words).map(|_| ())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            pool_words: DEFAULT_POOL_WORDS,
        }
    }
}
