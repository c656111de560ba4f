// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! Text codec: UTF-8 strings with the single-byte `CHAR` fast path.

use crate::{buffer::OutputBuffer, errors::EncodingResult, markers};

use super::num;

/// Writes a string as `CHAR` + byte when it encodes to exactly one UTF-8
/// byte, otherwise as `STRING` + length + bytes.
pub(crate) fn write_string(
    buffer: &mut OutputBuffer,
    little_endian: bool,
    value: &str,
) -> EncodingResult<()> {
    let bytes = value.as_bytes();
    if bytes.len() == 1 {
        buffer.write(&[markers::CHAR, bytes[0]])
    } else {
        buffer.write_u8(markers::STRING)?;
        num::write_int(buffer, little_endian, bytes.len() as i64)?;
        buffer.write(bytes)
    }
}

/// Writes a mapping key or schema field name: length + UTF-8 bytes, no
/// marker. Keys inside an object never carry their own type marker.
pub(crate) fn write_key(
    buffer: &mut OutputBuffer,
    little_endian: bool,
    key: &str,
) -> EncodingResult<()> {
    num::write_int(buffer, little_endian, key.len() as i64)?;
    buffer.write(key.as_bytes())
}
