// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! The encoder itself: preferences, sessions and the public entry points.

mod dispatch;
mod ndarray;
mod num;
mod soa;
mod text;

use std::{fmt, io::Write, sync::Arc};

use hashbrown::HashSet;

use crate::{
    buffer::OutputBuffer,
    depth::DepthGauge,
    errors::{EncodeError, EncodingResult},
    value::Value,
};

/// Fallback invoked on values with no native codec. Returns a replacement
/// value to encode in its place, or an error message.
pub type FallbackFn = dyn Fn(&Value) -> Result<Value, String>;

/// Layout selection for structured arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoaFormat {
    /// No explicit preference. Structured arrays still get an embedded
    /// schema, in Column layout.
    #[default]
    None,
    /// Array-of-structs: records interleaved in the payload.
    Row,
    /// Struct-of-arrays: one contiguous run of values per field.
    Column,
}

/// Preferences governing one encoder session.
pub struct EncoderPreferences {
    /// Emit counted containers instead of terminator-delimited ones.
    pub container_count: bool,
    /// Emit mapping pairs in lexicographic key order.
    pub sort_keys: bool,
    /// Always use 64-bit floats for normal numbers.
    pub no_float32: bool,
    /// Byte order for all multi-byte numerics. BJData is little-endian by
    /// default.
    pub little_endian: bool,
    /// Layout for structured arrays.
    pub soa_format: SoaFormat,
    /// Called on otherwise-unsupported values; absent means they fail.
    pub default_fallback: Option<Box<FallbackFn>>,
}

impl Default for EncoderPreferences {
    fn default() -> Self {
        Self {
            container_count: false,
            sort_keys: false,
            no_float32: false,
            little_endian: true,
            soa_format: SoaFormat::None,
            default_fallback: None,
        }
    }
}

impl fmt::Debug for EncoderPreferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncoderPreferences")
            .field("container_count", &self.container_count)
            .field("sort_keys", &self.sort_keys)
            .field("no_float32", &self.no_float32)
            .field("little_endian", &self.little_endian)
            .field("soa_format", &self.soa_format)
            .field("default_fallback", &self.default_fallback.is_some())
            .finish()
    }
}

/// One encoding session: preferences, the output buffer, the set of
/// container identities currently on the encoding stack, and the recursion
/// gauge.
///
/// A session lives for one logical document. Several roots may be encoded
/// back to back into the same buffer; once any of them fails the session
/// is poisoned and every later call, including [`EncoderSession::finalize`],
/// returns the original error.
pub struct EncoderSession {
    pub(crate) prefs: EncoderPreferences,
    pub(crate) buffer: OutputBuffer,
    pub(crate) visited: HashSet<usize>,
    pub(crate) depth: Arc<DepthGauge>,
    failure: Option<EncodeError>,
}

impl fmt::Debug for EncoderSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncoderSession")
            .field("prefs", &self.prefs)
            .field("buffer", &self.buffer)
            .field("failed", &self.failure.is_some())
            .finish()
    }
}

/// Open an encoding session. With a sink, filled buffer pages are handed
/// to it in program order and [`EncoderSession::finalize`] returns `None`;
/// without one, `finalize` returns the accumulated bytes.
pub fn open_session(
    preferences: EncoderPreferences,
    sink: Option<Box<dyn Write>>,
) -> EncodingResult<EncoderSession> {
    Ok(EncoderSession {
        buffer: OutputBuffer::new(sink)?,
        prefs: preferences,
        visited: HashSet::new(),
        depth: Arc::new(DepthGauge::default()),
        failure: None,
    })
}

impl EncoderSession {
    /// Encode one value, marker plus payload, appending to the session
    /// output.
    pub fn encode_value(&mut self, value: &Value) -> EncodingResult<()> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        let result = dispatch::encode_value(value, self, true);
        if let Err(err) = &result {
            self.failure = Some(err.clone());
        }
        result
    }

    /// Finish the session: trim the buffer and surrender the output, or
    /// flush the remainder to the sink. After a failed `encode_value` this
    /// returns that same error instead of partial output.
    pub fn finalize(self) -> EncodingResult<Option<Vec<u8>>> {
        if let Some(err) = self.failure {
            return Err(err);
        }
        self.buffer.finalize()
    }

    /// The preferences this session was opened with.
    pub fn preferences(&self) -> &EncoderPreferences {
        &self.prefs
    }

    #[cfg(test)]
    pub(crate) fn visited_is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

/// Convenience for encoding a single value straight to bytes. It is
/// preferable to reuse sessions for multiple roots; this covers the common
/// one-shot case.
pub fn encode_to_vec(value: &Value, preferences: EncoderPreferences) -> EncodingResult<Vec<u8>> {
    let mut session = open_session(preferences, None)?;
    session.encode_value(value)?;
    Ok(session.finalize()?.unwrap_or_default())
}
