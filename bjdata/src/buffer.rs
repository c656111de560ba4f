// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of [`OutputBuffer`], the growable byte
//! accumulator every codec writes into.

use std::io::Write;

use log::{log_enabled, trace};

use crate::{
    constants::{BUFFER_INITIAL_SIZE, BUFFER_SINK_SIZE},
    errors::EncodingResult,
};

/// A growable byte accumulator with an optional flush-to-sink threshold.
///
/// Without a sink the buffer simply grows (capacity doubling) and the
/// accumulated bytes are returned from [`OutputBuffer::finalize`]. With a
/// sink, the buffer is grown to exact fit and each filled page is handed
/// to the sink in program order, so memory stays bounded by the page size
/// plus the largest single write.
pub struct OutputBuffer {
    buf: Vec<u8>,
    cap: usize,
    sink: Option<Box<dyn Write>>,
}

impl std::fmt::Debug for OutputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputBuffer")
            .field("pos", &self.buf.len())
            .field("cap", &self.cap)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl OutputBuffer {
    /// Create a buffer, optionally draining into `sink`. The initial
    /// capacity is [`BUFFER_SINK_SIZE`] when a sink is present and
    /// [`BUFFER_INITIAL_SIZE`] otherwise.
    pub fn new(sink: Option<Box<dyn Write>>) -> EncodingResult<Self> {
        let cap = if sink.is_some() {
            BUFFER_SINK_SIZE
        } else {
            BUFFER_INITIAL_SIZE
        };
        let mut buf = Vec::new();
        buf.try_reserve_exact(cap)?;
        Ok(Self { buf, cap, sink })
    }

    /// Number of bytes committed and not yet flushed.
    pub fn position(&self) -> usize {
        self.buf.len()
    }

    /// Append all of `chunk`. Grows capacity first if needed; with a sink
    /// configured, hands the buffer over once the write position reaches
    /// the current capacity and starts a fresh page.
    pub fn write(&mut self, chunk: &[u8]) -> EncodingResult<()> {
        if chunk.is_empty() {
            return Ok(());
        }
        let pos = self.buf.len();
        if chunk.len() > self.cap - pos {
            let new_cap = if self.sink.is_none() {
                let mut new_cap = self.cap;
                while new_cap < pos + chunk.len() {
                    new_cap *= 2;
                }
                new_cap
            } else {
                // Exact fit; the page is flushed right after the copy.
                pos + chunk.len()
            };
            self.buf.try_reserve_exact(new_cap - pos)?;
            self.cap = new_cap;
        }
        self.buf.extend_from_slice(chunk);

        if let Some(sink) = self.sink.as_mut() {
            if self.buf.len() >= self.cap {
                sink.write_all(&self.buf)?;
                self.buf = Vec::new();
                self.buf.try_reserve_exact(BUFFER_SINK_SIZE)?;
                self.cap = BUFFER_SINK_SIZE;
            }
        }
        Ok(())
    }

    /// Append a single byte, typically a type marker.
    pub fn write_u8(&mut self, value: u8) -> EncodingResult<()> {
        self.write(&[value])
    }

    /// Trim spare capacity and surrender the output: the accumulated bytes
    /// when no sink is configured, `None` after flushing the remainder to
    /// the sink otherwise.
    pub fn finalize(mut self) -> EncodingResult<Option<Vec<u8>>> {
        match self.sink.take() {
            None => {
                self.buf.shrink_to_fit();
                log_output(&self.buf);
                Ok(Some(self.buf))
            }
            Some(mut sink) => {
                if !self.buf.is_empty() {
                    log_output(&self.buf);
                    sink.write_all(&self.buf)?;
                }
                Ok(None)
            }
        }
    }
}

/// Dumps outgoing bytes in hex to the `hex` trace target to aid debugging.
fn log_output(buf: &[u8]) {
    if !log_enabled!(target: "hex", log::Level::Trace) {
        return;
    }
    for line in buf.chunks(32) {
        let hex = line
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ");
        let chars: String = line
            .iter()
            .map(|&b| {
                if (32..=126).contains(&b) {
                    b as char
                } else {
                    '.'
                }
            })
            .collect();
        trace!(target: "hex", "{:<96} {}", hex, chars);
    }
}
