//! Error types for bigbytes.

use std::fmt;

/// Result type alias using [`CodecError`].
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors that can occur during conversion.
///
/// Input errors (`MissingArgs`, `InvalidArgType`, `BufferTooSmall`,
/// `UnknownExport`, `InvalidConfig`) are recoverable and abort only the
/// current call.
/// `ResourceExhausted` and `Host` are fatal: see [`CodecError::is_fatal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// An exported operation was called with the wrong number of arguments.
    MissingArgs {
        /// The number of arguments the operation takes.
        expected: usize,
        /// The number of arguments supplied.
        actual: usize,
    },

    /// An argument had the wrong host type.
    InvalidArgType {
        /// The type the operation expected.
        expected: &'static str,
    },

    /// A caller-provided output buffer cannot hold the encoded words.
    BufferTooSmall {
        /// Bytes required.
        needed: usize,
        /// Bytes available.
        actual: usize,
    },

    /// No exported operation has this name.
    UnknownExport {
        /// The requested name.
        name: String,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The buffer provider could not supply backing storage.
    ResourceExhausted {
        /// The size of the failed request in bytes.
        requested: usize,
    },

    /// The host failed in the middle of an operation.
    Host {
        /// Description of the failure.
        message: String,
    },
}

impl CodecError {
    /// Creates a host failure.
    pub fn host(message: impl Into<String>) -> Self {
        CodecError::Host {
            message: message.into(),
        }
    }

    /// Returns true for failures that leave no safe way to produce a result.
    ///
    /// The codec never truncates or hands back a partially written buffer, so
    /// callers either propagate these or abort via [`abort_on_fatal`].
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CodecError::ResourceExhausted { .. } | CodecError::Host { .. }
        )
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::MissingArgs { expected, actual } => {
                write!(
                    f,
                    "wrong number of arguments: expected {}, got {}",
                    expected, actual
                )
            }
            CodecError::InvalidArgType { expected } => {
                write!(f, "invalid argument type: expected {}", expected)
            }
            CodecError::BufferTooSmall { needed, actual } => {
                write!(f, "buffer too small: {} bytes (need {})", actual, needed)
            }
            CodecError::UnknownExport { name } => write!(f, "unknown export: {}", name),
            CodecError::InvalidConfig { message } => write!(f, "invalid config: {}", message),
            CodecError::ResourceExhausted { requested } => {
                write!(f, "resource exhausted: failed to allocate {} bytes", requested)
            }
            CodecError::Host { message } => write!(f, "host failure: {}", message),
        }
    }
}

impl std::error::Error for CodecError {}

/// Aborts the process on fatal errors, passes everything else through.
///
/// For hosts that cannot surface allocator exhaustion to their callers.
pub fn abort_on_fatal<T>(result: Result<T>) -> Result<T> {
    match result {
        Err(err) if err.is_fatal() => {
            tracing::error!(error = %err, "fatal codec failure, aborting");
            std::process::abort()
        }
        other => other,
    }
}
