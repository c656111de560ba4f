// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

mod containers;
mod errors;
mod scenarios;

use crate::{encode_to_vec, EncodeError, EncoderPreferences, Value};

pub fn encode_default(value: impl Into<Value>) -> Vec<u8> {
    encode_with(value, EncoderPreferences::default())
}

pub fn encode_with(value: impl Into<Value>, preferences: EncoderPreferences) -> Vec<u8> {
    let value = value.into();
    let bytes = encode_to_vec(&value, preferences).unwrap();
    println!("value = {}", value);
    println!("encoded bytes = {:02x?}", bytes);
    bytes
}

pub fn encode_err(value: impl Into<Value>, preferences: EncoderPreferences) -> EncodeError {
    encode_to_vec(&value.into(), preferences).unwrap_err()
}
