// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! Encoder error types.

use std::{collections::TryReserveError, sync::Arc};

use thiserror::Error;

/// Result of an encoding operation.
pub type EncodingResult<T> = std::result::Result<T, EncodeError>;

/// Errors surfaced while encoding a value tree to BJData.
///
/// The enum is `Clone` so a failed session can keep returning the error
/// that poisoned it; sink errors are held behind an `Arc` for that reason.
#[derive(Error, Debug, Clone)]
pub enum EncodeError {
    /// The output buffer could not be grown.
    #[error("Out of memory while growing the output buffer")]
    OutOfMemory(#[from] TryReserveError),
    /// The sink rejected a page of output.
    #[error("Sink write failed: {0}")]
    Sink(#[source] Arc<std::io::Error>),
    /// A sequence or mapping transitively contains itself.
    #[error("Circular reference detected")]
    CircularReference,
    /// Nesting exceeded the maximum encoding depth.
    #[error("Encoding aborted, maximum recursion depth {0} reached")]
    RecursionDepthExceeded(u64),
    /// A mapping key was not text.
    #[error("Mapping keys can only be strings, got {0}")]
    BadKeyType(&'static str),
    /// No codec matched the value and no fallback was configured.
    #[error("Cannot encode value of type {0}")]
    UnsupportedType(&'static str),
    /// A value had to be re-expressed as decimal text and that conversion failed.
    #[error("High-precision fallback failed: {0}")]
    OverflowToDecimalFailed(String),
    /// A structured array had a field the schema cannot express.
    #[error("Invalid structured array: {0}")]
    InvalidStructuredArray(String),
    /// The configured fallback function reported an error.
    #[error("Default fallback function failed: {0}")]
    FallbackFailed(String),
}

impl From<std::io::Error> for EncodeError {
    fn from(value: std::io::Error) -> Self {
        EncodeError::Sink(Arc::new(value))
    }
}
