// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! Numeric codecs: range-based integer narrowing, float classification and
//! the high-precision decimal text fallback.

use bigdecimal::BigDecimal;
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::{
    buffer::OutputBuffer,
    errors::{EncodeError, EncodingResult},
    markers,
    value::HighPrecision,
};

macro_rules! pack_fn {
    ($name: ident, $tp: ty, $write: ident) => {
        fn $name(buf: &mut [u8], little_endian: bool, value: $tp) {
            if little_endian {
                LittleEndian::$write(buf, value);
            } else {
                BigEndian::$write(buf, value);
            }
        }
    };
}

pack_fn!(pack_u16, u16, write_u16);
pack_fn!(pack_u32, u32, write_u32);
pack_fn!(pack_u64, u64, write_u64);
pack_fn!(pack_i16, i16, write_i16);
pack_fn!(pack_i32, i32, write_i32);
pack_fn!(pack_i64, i64, write_i64);
pack_fn!(pack_f32, f32, write_f32);
pack_fn!(pack_f64, f64, write_f64);

/// Writes `value` as marker plus payload, using the narrowest BJData
/// integer type whose range contains it. Non-negative values prefer the
/// unsigned widths.
pub(crate) fn write_int(
    buffer: &mut OutputBuffer,
    little_endian: bool,
    value: i64,
) -> EncodingResult<()> {
    let mut tmp = [0u8; 9];
    let len = if value >= 0 {
        if value < 1 << 8 {
            tmp[0] = markers::UINT8;
            tmp[1] = value as u8;
            2
        } else if value < 1 << 16 {
            tmp[0] = markers::UINT16;
            pack_u16(&mut tmp[1..3], little_endian, value as u16);
            3
        } else if value < 1 << 32 {
            tmp[0] = markers::UINT32;
            pack_u32(&mut tmp[1..5], little_endian, value as u32);
            5
        } else {
            tmp[0] = markers::UINT64;
            pack_u64(&mut tmp[1..9], little_endian, value as u64);
            9
        }
    } else if value >= -(1 << 7) {
        tmp[0] = markers::INT8;
        tmp[1] = value as i8 as u8;
        2
    } else if value >= -(1 << 15) {
        tmp[0] = markers::INT16;
        pack_i16(&mut tmp[1..3], little_endian, value as i16);
        3
    } else if value >= -(1 << 31) {
        tmp[0] = markers::INT32;
        pack_i32(&mut tmp[1..5], little_endian, value as i32);
        5
    } else {
        tmp[0] = markers::INT64;
        pack_i64(&mut tmp[1..9], little_endian, value);
        9
    };
    buffer.write(&tmp[..len])
}

/// Writes an arbitrary-precision integer: through the signed table when it
/// fits, as `UINT64` when only the unsigned 64-bit range contains it, and
/// as high-precision decimal text beyond that.
pub(crate) fn write_big_int(
    buffer: &mut OutputBuffer,
    little_endian: bool,
    value: &BigInt,
) -> EncodingResult<()> {
    if let Some(v) = value.to_i64() {
        write_int(buffer, little_endian, v)
    } else if let Some(v) = value.to_u64() {
        let mut tmp = [0u8; 9];
        tmp[0] = markers::UINT64;
        pack_u64(&mut tmp[1..9], little_endian, v);
        buffer.write(&tmp)
    } else {
        write_high_prec_text(buffer, little_endian, &value.to_string())
    }
}

/// Writes the `HIGH_PREC` marker, the integer-coded byte length of `text`,
/// then the text itself.
pub(crate) fn write_high_prec_text(
    buffer: &mut OutputBuffer,
    little_endian: bool,
    text: &str,
) -> EncodingResult<()> {
    buffer.write_u8(markers::HIGH_PREC)?;
    write_int(buffer, little_endian, text.len() as i64)?;
    buffer.write(text.as_bytes())
}

/// Writes a high-precision decimal: canonical text when finite, `NULL`
/// otherwise.
pub(crate) fn write_high_precision(
    buffer: &mut OutputBuffer,
    little_endian: bool,
    value: &HighPrecision,
) -> EncodingResult<()> {
    if value.is_finite() {
        write_high_prec_text(buffer, little_endian, &value.to_string())
    } else {
        buffer.write_u8(markers::NULL)
    }
}

/// Writes a double according to its class: `NULL` for NaN and infinities,
/// 32-bit for zeroes, exact decimal text for subnormals, and 32 or 64-bit
/// for normal values depending on range and the `no_float32` preference.
pub(crate) fn write_double(
    buffer: &mut OutputBuffer,
    little_endian: bool,
    no_float32: bool,
    value: f64,
) -> EncodingResult<()> {
    let mut tmp = [0u8; 9];
    match value.classify() {
        std::num::FpCategory::Nan | std::num::FpCategory::Infinite => {
            buffer.write_u8(markers::NULL)
        }
        std::num::FpCategory::Zero => {
            tmp[0] = markers::FLOAT32;
            pack_f32(&mut tmp[1..5], little_endian, value as f32);
            buffer.write(&tmp[..5])
        }
        std::num::FpCategory::Subnormal => {
            // Exact decimal expansion of the binary value.
            let decimal = BigDecimal::try_from(value)
                .map_err(|e| EncodeError::OverflowToDecimalFailed(e.to_string()))?;
            write_high_prec_text(buffer, little_endian, &decimal.to_string())
        }
        std::num::FpCategory::Normal => {
            let abs = value.abs();
            if !no_float32 && (1.18e-38..=3.4e38).contains(&abs) {
                tmp[0] = markers::FLOAT32;
                pack_f32(&mut tmp[1..5], little_endian, value as f32);
                buffer.write(&tmp[..5])
            } else {
                tmp[0] = markers::FLOAT64;
                pack_f64(&mut tmp[1..9], little_endian, value);
                buffer.write(&tmp[..9])
            }
        }
    }
}
