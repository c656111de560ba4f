// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! The type dispatcher: fans out on the dynamic type of each value, guards
//! recursion depth and detects circular references through containers.

use crate::{
    depth::DepthLock,
    errors::{EncodeError, EncodingResult},
    markers,
    value::{List, Map, Value},
};

use super::{ndarray, num, soa, text, EncoderSession};

/// Encodes one value, marker plus payload. `allow_fallback` is cleared for
/// the immediate product of the fallback function so it cannot loop on the
/// same node; children regain it.
pub(crate) fn encode_value(
    value: &Value,
    session: &mut EncoderSession,
    allow_fallback: bool,
) -> EncodingResult<()> {
    let little_endian = session.prefs.little_endian;
    match value {
        Value::Null => session.buffer.write_u8(markers::NULL),
        Value::Bool(true) => session.buffer.write_u8(markers::BOOL_TRUE),
        Value::Bool(false) => session.buffer.write_u8(markers::BOOL_FALSE),
        Value::Text(v) => text::write_string(&mut session.buffer, little_endian, v),
        Value::Int(v) => num::write_big_int(&mut session.buffer, little_endian, v),
        Value::Float(v) => num::write_double(
            &mut session.buffer,
            little_endian,
            session.prefs.no_float32,
            *v,
        ),
        Value::Decimal(v) => num::write_high_precision(&mut session.buffer, little_endian, v),
        Value::Bytes(v) => encode_bytes(v, session),
        Value::Tensor(v) => {
            let gauge = session.depth.clone();
            let _lock = DepthLock::obtain(&gauge)?;
            ndarray::encode_tensor(v, session)
        }
        Value::StructuredArray(v) => {
            let gauge = session.depth.clone();
            let _lock = DepthLock::obtain(&gauge)?;
            soa::encode_structured(v, session)
        }
        Value::Sequence(v) => {
            let gauge = session.depth.clone();
            let _lock = DepthLock::obtain(&gauge)?;
            encode_sequence(v, session)
        }
        Value::Mapping(v) => {
            let gauge = session.depth.clone();
            let _lock = DepthLock::obtain(&gauge)?;
            encode_mapping(v, session)
        }
        Value::Foreign(_) => {
            if !allow_fallback {
                return Err(EncodeError::UnsupportedType(value.type_name()));
            }
            let produced = match session.prefs.default_fallback.as_ref() {
                Some(fallback) => fallback(value).map_err(EncodeError::FallbackFailed)?,
                None => return Err(EncodeError::UnsupportedType(value.type_name())),
            };
            let gauge = session.depth.clone();
            let _lock = DepthLock::obtain(&gauge)?;
            encode_value(&produced, session, false)
        }
    }
}

/// A byte buffer is a typed, counted array of `UINT8`: fixed prefix,
/// length, then the raw bytes with no terminator.
fn encode_bytes(bytes: &[u8], session: &mut EncoderSession) -> EncodingResult<()> {
    session.buffer.write(&markers::BYTES_ARRAY_PREFIX)?;
    num::write_int(
        &mut session.buffer,
        session.prefs.little_endian,
        bytes.len() as i64,
    )?;
    session.buffer.write(bytes)
}

fn encode_sequence(list: &List, session: &mut EncoderSession) -> EncodingResult<()> {
    let ident = list.identity();
    if !session.visited.insert(ident) {
        return Err(EncodeError::CircularReference);
    }
    let result = encode_sequence_items(list, session);
    // The identity leaves the set on success and failure alike.
    session.visited.remove(&ident);
    result
}

fn encode_sequence_items(list: &List, session: &mut EncoderSession) -> EncodingResult<()> {
    let items = list.items();
    session.buffer.write_u8(markers::ARRAY_START)?;
    if session.prefs.container_count {
        session.buffer.write_u8(markers::CONTAINER_COUNT)?;
        num::write_int(
            &mut session.buffer,
            session.prefs.little_endian,
            items.len() as i64,
        )?;
    }
    for item in items.iter() {
        encode_value(item, session, true)?;
    }
    if !session.prefs.container_count {
        session.buffer.write_u8(markers::ARRAY_END)?;
    }
    Ok(())
}

fn encode_mapping(map: &Map, session: &mut EncoderSession) -> EncodingResult<()> {
    let ident = map.identity();
    if !session.visited.insert(ident) {
        return Err(EncodeError::CircularReference);
    }
    let result = encode_mapping_pairs(map, session);
    session.visited.remove(&ident);
    result
}

fn key_str(value: &Value) -> Option<&str> {
    match value {
        Value::Text(s) => Some(s.as_str()),
        _ => None,
    }
}

fn encode_mapping_pairs(map: &Map, session: &mut EncoderSession) -> EncodingResult<()> {
    let little_endian = session.prefs.little_endian;
    let entries = map.entries();
    session.buffer.write_u8(markers::OBJECT_START)?;
    if session.prefs.container_count {
        session.buffer.write_u8(markers::CONTAINER_COUNT)?;
        num::write_int(&mut session.buffer, little_endian, entries.len() as i64)?;
    }
    let mut pairs: Vec<&(Value, Value)> = entries.iter().collect();
    if session.prefs.sort_keys {
        // Non-text keys sort first and fail below when emitted.
        pairs.sort_by(|a, b| key_str(&a.0).cmp(&key_str(&b.0)));
    }
    for (key, child) in pairs.iter().map(|p| (&p.0, &p.1)) {
        let Value::Text(key) = key else {
            return Err(EncodeError::BadKeyType(key.type_name()));
        };
        text::write_key(&mut session.buffer, little_endian, key)?;
        encode_value(child, session, true)?;
    }
    if !session.prefs.container_count {
        session.buffer.write_u8(markers::OBJECT_END)?;
    }
    Ok(())
}
