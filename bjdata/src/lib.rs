// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

#![warn(missing_docs)]

//! Encoder core for [BJData](https://neurojson.org), a binary JSON-like
//! format that extends UBJSON with unsigned integer and half-precision
//! float types.
//!
//! The crate serializes a closed dynamic [`Value`] universe - null,
//! booleans, arbitrary-precision integers, floats, high-precision
//! decimals, byte buffers, text, shared sequences and mappings, and N-D
//! numeric arrays including structured record arrays - into the BJData
//! wire grammar. Numbers are narrowed to the smallest type that holds
//! them, homogeneous arrays become typed counted containers, and record
//! arrays carry an embedded schema in row or column layout.
//!
//! # Example
//!
//! ```
//! use bjdata::{encode_to_vec, EncoderPreferences, List, Value};
//!
//! let list = List::new();
//! list.push(1u8);
//! list.push(2u8);
//! let bytes = encode_to_vec(&Value::from(list), EncoderPreferences::default()).unwrap();
//! assert_eq!(bytes, b"[\x55\x01\x55\x02]");
//! ```
//!
//! For streaming output, [`open_session`] accepts a sink that receives
//! filled buffer pages in program order.

pub mod constants;
pub mod markers;

mod buffer;
mod depth;
mod encoder;
mod errors;
mod tensor;
mod value;

#[cfg(test)]
mod tests;

pub use buffer::OutputBuffer;
pub use depth::{DepthGauge, DepthLock};
pub use encoder::{
    encode_to_vec, open_session, EncoderPreferences, EncoderSession, FallbackFn, SoaFormat,
};
pub use errors::{EncodeError, EncodingResult};
pub use tensor::{ElementKind, FieldSpec, StructuredArray, Tensor, TensorError};
pub use value::{Foreign, ForeignValue, HighPrecision, List, Map, ParseHighPrecisionError, Value};
