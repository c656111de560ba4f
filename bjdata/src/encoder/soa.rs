// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! Encoder for structured arrays: an embedded field schema followed by the
//! record payload in either row (array-of-structs) or column
//! (struct-of-arrays) layout.

use log::error;

use crate::{
    buffer::OutputBuffer,
    errors::{EncodeError, EncodingResult},
    markers,
    tensor::{ElementKind, StructuredArray},
};

use super::{num, text, EncoderSession, SoaFormat};

/// Encodes a structured array. Row layout opens with `[`, column layout
/// with `{`; both embed the same `$ { <name> <marker> ... } # <count>`
/// schema and differ only in payload iteration order.
pub(crate) fn encode_structured(
    array: &StructuredArray,
    session: &mut EncoderSession,
) -> EncodingResult<()> {
    let little_endian = session.prefs.little_endian;
    // Column is also the automatic choice when no preference is set.
    let row_major = session.prefs.soa_format == SoaFormat::Row;

    // Resolve every field to (schema marker, byte width) up front so an
    // inexpressible field fails before anything is written.
    let mut layout = Vec::with_capacity(array.fields().len());
    for field in array.fields() {
        let Some((marker, width)) = field.kind.field_marker().zip(field.kind.fixed_item_size())
        else {
            error!(
                "Structured array field {} has element kind {:?}, which records cannot hold",
                field.name, field.kind
            );
            return Err(EncodeError::InvalidStructuredArray(format!(
                "field {} has unsupported element kind {:?}",
                field.name, field.kind
            )));
        };
        layout.push((field, marker, width));
    }

    session.buffer.write_u8(if row_major {
        markers::ARRAY_START
    } else {
        markers::OBJECT_START
    })?;
    session.buffer.write_u8(markers::CONTAINER_TYPE)?;

    session.buffer.write_u8(markers::OBJECT_START)?;
    for (field, marker, _) in &layout {
        text::write_key(&mut session.buffer, little_endian, &field.name)?;
        session.buffer.write_u8(*marker)?;
    }
    session.buffer.write_u8(markers::OBJECT_END)?;

    session.buffer.write_u8(markers::CONTAINER_COUNT)?;
    if array.rank() > 1 {
        session.buffer.write_u8(markers::ARRAY_START)?;
        for d in array.shape() {
            num::write_int(&mut session.buffer, little_endian, *d as i64)?;
        }
        session.buffer.write_u8(markers::ARRAY_END)?;
    } else {
        num::write_int(&mut session.buffer, little_endian, array.record_count() as i64)?;
    }

    let stride = array.item_size();
    let count = array.record_count();
    let data = array.data();
    if row_major {
        // Interleaved: all fields of each record in schema order.
        for record in 0..count {
            let base = record * stride;
            for (field, _, width) in &layout {
                let start = base + field.offset;
                write_field(&mut session.buffer, field.kind, &data[start..start + width])?;
            }
        }
    } else {
        // Columnar: every record's value of each field, contiguously.
        for (field, _, width) in &layout {
            for record in 0..count {
                let start = record * stride + field.offset;
                write_field(&mut session.buffer, field.kind, &data[start..start + width])?;
            }
        }
    }
    Ok(())
}

fn write_field(buffer: &mut OutputBuffer, kind: ElementKind, bytes: &[u8]) -> EncodingResult<()> {
    if kind == ElementKind::Bool {
        buffer.write_u8(if bytes[0] != 0 {
            markers::BOOL_TRUE
        } else {
            markers::BOOL_FALSE
        })
    } else {
        // Raw field bytes, native element byte order.
        buffer.write(bytes)
    }
}
