// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! The canonical BJData type marker bytes. Every codec in this crate writes
//! these and nothing else; the values are fixed by the BJData specification.

/// Null value.
pub const NULL: u8 = b'Z';
/// Boolean true.
pub const BOOL_TRUE: u8 = b'T';
/// Boolean false.
pub const BOOL_FALSE: u8 = b'F';
/// Single byte character.
pub const CHAR: u8 = b'C';
/// Length-prefixed UTF-8 string.
pub const STRING: u8 = b'S';
/// High-precision number, serialized as decimal text.
pub const HIGH_PREC: u8 = b'H';

/// Signed 8-bit integer.
pub const INT8: u8 = b'i';
/// Unsigned 8-bit integer.
pub const UINT8: u8 = b'U';
/// Signed 16-bit integer.
pub const INT16: u8 = b'I';
/// Unsigned 16-bit integer (BJData extension).
pub const UINT16: u8 = b'u';
/// Signed 32-bit integer.
pub const INT32: u8 = b'l';
/// Unsigned 32-bit integer (BJData extension).
pub const UINT32: u8 = b'm';
/// Signed 64-bit integer.
pub const INT64: u8 = b'L';
/// Unsigned 64-bit integer (BJData extension).
pub const UINT64: u8 = b'M';

/// IEEE-754 half precision float (BJData extension).
pub const FLOAT16: u8 = b'h';
/// IEEE-754 single precision float.
pub const FLOAT32: u8 = b'd';
/// IEEE-754 double precision float.
pub const FLOAT64: u8 = b'D';

/// Array container start.
pub const ARRAY_START: u8 = b'[';
/// Array container end.
pub const ARRAY_END: u8 = b']';
/// Object container start.
pub const OBJECT_START: u8 = b'{';
/// Object container end.
pub const OBJECT_END: u8 = b'}';
/// Typed container marker; children omit their own type markers.
pub const CONTAINER_TYPE: u8 = b'$';
/// Counted container marker; the container has no terminator.
pub const CONTAINER_COUNT: u8 = b'#';

/// The fixed prefix emitted before a raw byte buffer: a typed, counted
/// array of `UINT8` elements.
pub const BYTES_ARRAY_PREFIX: [u8; 4] = [ARRAY_START, CONTAINER_TYPE, UINT8, CONTAINER_COUNT];
