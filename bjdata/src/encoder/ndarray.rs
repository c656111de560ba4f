// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! Encoder for homogeneous N-D numeric arrays as typed, counted containers
//! with an explicit shape.

use crate::{
    errors::EncodingResult,
    markers,
    tensor::{ElementKind, Tensor},
};

use super::{num, EncoderSession};

/// Encodes a tensor. Rank 0 becomes a bare typed scalar; rank >= 1 becomes
/// `[ $ <elem> #` followed by a nested shape array and the raw payload.
pub(crate) fn encode_tensor(tensor: &Tensor, session: &mut EncoderSession) -> EncodingResult<()> {
    let little_endian = session.prefs.little_endian;
    let marker = tensor.kind().marker();

    if tensor.rank() == 0 {
        session.buffer.write_u8(marker)?;
        if tensor.kind().is_text() {
            num::write_int(&mut session.buffer, little_endian, tensor.item_size() as i64)?;
        }
        return session.buffer.write(tensor.data());
    }

    session
        .buffer
        .write(&[markers::ARRAY_START, markers::CONTAINER_TYPE])?;
    // Text arrays are declared as char elements; the shape carries the width.
    if marker == markers::STRING {
        session.buffer.write_u8(markers::CHAR)?;
    } else {
        session.buffer.write_u8(marker)?;
    }
    session.buffer.write_u8(markers::CONTAINER_COUNT)?;

    session.buffer.write_u8(markers::ARRAY_START)?;
    for d in tensor.shape() {
        num::write_int(&mut session.buffer, little_endian, *d as i64)?;
    }
    if tensor.kind() == ElementKind::Unicode {
        // Trailing dimension for the 4-byte code units.
        num::write_int(&mut session.buffer, little_endian, 4)?;
    }
    session.buffer.write_u8(markers::ARRAY_END)?;

    // Contiguous row-major payload in native element byte order. No
    // ARRAY_END since the count was specified.
    session.buffer.write(tensor.data())
}
