// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! Contains common encoder constants.

/// Maximum depth the encoder will recurse into nested containers before
/// giving up with [`EncodeError::RecursionDepthExceeded`](crate::EncodeError).
pub const MAX_ENCODING_DEPTH: u64 = 256;

/// Initial output buffer capacity when no sink is configured.
pub const BUFFER_INITIAL_SIZE: usize = 64;

/// Output buffer capacity when a sink is configured, i.e. the minimum
/// number of bytes accumulated before a page is handed to the sink.
pub const BUFFER_SINK_SIZE: usize = 256;
