//! Error types for color space operations.
//!
//! The conversion pipeline itself is total: every defined transform accepts
//! any real input and non-finite values propagate to the output. The only
//! fallible operations are at the edges — resolving a space name supplied
//! at runtime.

use thiserror::Error;

/// Color space operation error.
#[derive(Debug, Error)]
pub enum ChromaError {
    /// A space name could not be resolved to a known [`Space`](crate::Space).
    #[error("unknown color space: {0:?}")]
    UnknownSpace(String),
}

/// Result type for color space operations.
pub type ChromaResult<T> = Result<T, ChromaError>;
