// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! End to end checks of the wire bytes for the common value shapes, all
//! with the default preferences unless stated otherwise.

use std::{cell::RefCell, io::Write, rc::Rc};

use super::{encode_default, encode_with};
use crate::{open_session, EncoderPreferences, List, Map, Value};

#[test]
fn null_and_booleans() {
    assert_eq!(encode_default(Value::Null), [0x5A]);
    assert_eq!(encode_default(true), [0x54]);
    assert_eq!(encode_default(false), [0x46]);
}

#[test]
fn small_integers() {
    assert_eq!(encode_default(127u8), [0x55, 0x7F]);
    assert_eq!(encode_default(128u8), [0x55, 0x80]);
    assert_eq!(encode_default(-129i32), [0x49, 0x7F, 0xFF]);
}

#[test]
fn text() {
    assert_eq!(encode_default("A"), [0x43, 0x41]);
    assert_eq!(encode_default("AB"), [0x53, 0x55, 0x02, 0x41, 0x42]);
}

#[test]
fn sequences() {
    let list = List::new();
    list.push(1u8);
    list.push(2u8);
    assert_eq!(
        encode_default(list),
        [0x5B, 0x55, 0x01, 0x55, 0x02, 0x5D]
    );
}

#[test]
fn mappings() {
    let map = Map::new();
    map.insert("a", 1u8);
    assert_eq!(
        encode_default(map),
        [0x7B, 0x55, 0x01, 0x61, 0x55, 0x01, 0x7D]
    );
}

#[test]
fn byte_buffers_are_typed_counted_arrays() {
    assert_eq!(
        encode_default(vec![1u8, 2, 3]),
        [0x5B, 0x24, 0x55, 0x23, 0x55, 0x03, 0x01, 0x02, 0x03]
    );
    // An empty buffer still declares its count.
    assert_eq!(
        encode_default(Vec::<u8>::new()),
        [0x5B, 0x24, 0x55, 0x23, 0x55, 0x00]
    );
}

#[test]
fn high_precision_decimals() {
    let value: Value = "14324.098".parse::<crate::HighPrecision>().unwrap().into();
    let mut expected = vec![0x48, 0x55, 0x09];
    expected.extend_from_slice(b"14324.098");
    assert_eq!(encode_default(value), expected);

    // Non-finite decimals degrade to null, like non-finite floats.
    assert_eq!(encode_default(crate::HighPrecision::NaN), [0x5A]);
}

#[test]
fn big_endian_preference_applies_everywhere() {
    let prefs = EncoderPreferences {
        little_endian: false,
        ..Default::default()
    };
    assert_eq!(encode_with(-129i32, prefs), [0x49, 0xFF, 0x7F]);

    let prefs = EncoderPreferences {
        little_endian: false,
        ..Default::default()
    };
    assert_eq!(encode_with(1.0f64, prefs), [0x64, 0x3F, 0x80, 0x00, 0x00]);
}

#[derive(Clone, Default)]
struct SharedSink(Rc<RefCell<Vec<u8>>>);

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn encoding_through_a_sink_matches_buffered_output() {
    // Big enough to force several page flushes.
    let list = List::new();
    for i in 0..500u32 {
        list.push(i);
    }
    let value = Value::from(list);

    let expected = encode_with(value.clone(), EncoderPreferences::default());

    let sink = SharedSink::default();
    let collected = sink.0.clone();
    let mut session = open_session(EncoderPreferences::default(), Some(Box::new(sink))).unwrap();
    session.encode_value(&value).unwrap();
    assert!(session.finalize().unwrap().is_none());

    assert_eq!(*collected.borrow(), expected);
}

#[test]
fn one_session_can_encode_several_roots() {
    let mut session = open_session(EncoderPreferences::default(), None).unwrap();
    session.encode_value(&Value::Null).unwrap();
    session.encode_value(&Value::from(true)).unwrap();
    session.encode_value(&Value::from("A")).unwrap();
    assert_eq!(
        session.finalize().unwrap().unwrap(),
        [0x5A, 0x54, 0x43, 0x41]
    );
}
