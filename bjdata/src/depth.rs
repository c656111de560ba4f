// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! Recursion depth tracking for the encoder.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::{constants::MAX_ENCODING_DEPTH, errors::EncodeError};

/// Depth gauge used on recursive containers to limit how deep the encoder
/// will descend before giving up.
#[derive(Debug)]
pub struct DepthGauge {
    max_depth: u64,
    current_depth: AtomicU64,
}

impl Default for DepthGauge {
    fn default() -> Self {
        Self::new(MAX_ENCODING_DEPTH)
    }
}

impl DepthGauge {
    /// Create a new depth gauge with the specified max depth.
    pub fn new(max_depth: u64) -> Self {
        Self {
            max_depth,
            current_depth: AtomicU64::new(0),
        }
    }

    /// Get the max depth of the gauge.
    pub fn max_depth(&self) -> u64 {
        self.max_depth
    }

    #[cfg(test)]
    pub(crate) fn current_depth(&self) -> u64 {
        self.current_depth.load(Ordering::Relaxed)
    }
}

/// Depth lock holds a reference on the depth gauge. The drop impl ensures
/// that the reference is decremented even if there is a panic unwind.
#[derive(Debug)]
pub struct DepthLock<'a> {
    depth_gauge: &'a DepthGauge,
}

impl Drop for DepthLock<'_> {
    fn drop(&mut self) {
        self.depth_gauge
            .current_depth
            .fetch_sub(1, Ordering::Release);
    }
}

impl<'a> DepthLock<'a> {
    /// The depth lock tests if the depth can increment and then obtains a
    /// lock on it. The lock will decrement the depth when it drops to ensure
    /// proper behaviour during unwinding.
    pub fn obtain(depth_gauge: &'a DepthGauge) -> Result<DepthLock<'a>, EncodeError> {
        let current = depth_gauge.current_depth.fetch_add(1, Ordering::Acquire);
        let gauge = Self { depth_gauge };

        if current >= depth_gauge.max_depth {
            Err(EncodeError::RecursionDepthExceeded(depth_gauge.max_depth))
        } else {
            Ok(gauge)
        }
    }
}
