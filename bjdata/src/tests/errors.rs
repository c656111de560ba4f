// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! Failure paths: cycles, depth, key types, unsupported values and the
//! fallback hook.

use super::{encode_err, encode_with};
use crate::{
    constants::MAX_ENCODING_DEPTH, open_session, ElementKind, EncodeError, EncoderPreferences,
    FieldSpec, Foreign, List, Map, StructuredArray, Value,
};

#[test]
fn self_referencing_list_is_rejected() {
    let list = List::new();
    list.push(list.clone());
    let value = Value::from(list);

    let mut session = open_session(EncoderPreferences::default(), None).unwrap();
    let err = session.encode_value(&value).unwrap_err();
    assert!(matches!(err, EncodeError::CircularReference));
    // The unwind released every identity it had pushed.
    assert!(session.visited_is_empty());

    // The session stays poisoned.
    assert!(matches!(
        session.encode_value(&Value::Null),
        Err(EncodeError::CircularReference)
    ));
    assert!(matches!(
        session.finalize(),
        Err(EncodeError::CircularReference)
    ));
}

#[test]
fn mutual_reference_through_a_mapping_is_rejected() {
    let list = List::new();
    let map = Map::new();
    map.insert("child", list.clone());
    list.push(map);

    let err = encode_err(list, EncoderPreferences::default());
    assert!(matches!(err, EncodeError::CircularReference));
}

#[test]
fn depth_limit_applies_to_nesting() {
    let mut value = Value::from(List::new());
    for _ in 0..MAX_ENCODING_DEPTH + 10 {
        let list = List::new();
        list.push(value);
        value = Value::from(list);
    }
    let err = encode_err(value, EncoderPreferences::default());
    assert!(matches!(
        err,
        EncodeError::RecursionDepthExceeded(MAX_ENCODING_DEPTH)
    ));
}

#[test]
fn non_text_keys_are_rejected() {
    let map = Map::new();
    map.insert(1u8, "one");
    let err = encode_err(map, EncoderPreferences::default());
    assert!(matches!(err, EncodeError::BadKeyType("int")));
}

#[test]
fn foreign_without_fallback_is_unsupported() {
    let value = Foreign::new(std::time::Duration::from_secs(5));
    let err = encode_err(value, EncoderPreferences::default());
    assert!(matches!(err, EncodeError::UnsupportedType("foreign")));
}

#[derive(Debug)]
struct Complex {
    re: f64,
    im: f64,
}

fn complex_fallback() -> EncoderPreferences {
    EncoderPreferences {
        default_fallback: Some(Box::new(|value| match value {
            Value::Foreign(f) => f
                .downcast_ref::<Complex>()
                .map(|c| Value::from(vec![Value::from(c.re), Value::from(c.im)]))
                .ok_or_else(|| "unknown foreign value".to_string()),
            _ => Err("fallback called on a native value".to_string()),
        })),
        ..Default::default()
    }
}

#[test]
fn fallback_product_is_encoded() {
    let value = Foreign::new(Complex { re: 1.0, im: 2.0 });
    assert_eq!(
        encode_with(value, complex_fallback()),
        [
            0x5B, 0x64, 0x00, 0x00, 0x80, 0x3F, 0x64, 0x00, 0x00, 0x00, 0x40, 0x5D
        ]
    );
}

#[test]
fn fallback_error_is_surfaced() {
    let value = Foreign::new(std::time::Duration::from_secs(5));
    let err = encode_err(value, complex_fallback());
    assert!(matches!(err, EncodeError::FallbackFailed(_)));
}

#[test]
fn fallback_may_not_punt_to_itself() {
    // A fallback that hands back another foreign value does not loop.
    let prefs = EncoderPreferences {
        default_fallback: Some(Box::new(|_| Ok(Value::Foreign(Foreign::new(0u8))))),
        ..Default::default()
    };
    let err = encode_err(Foreign::new(1u8), prefs);
    assert!(matches!(err, EncodeError::UnsupportedType("foreign")));
}

#[test]
fn fallback_applies_inside_containers() {
    let list = List::new();
    list.push(Foreign::new(Complex { re: 0.0, im: 0.0 }));
    list.push(Foreign::new(Complex { re: 0.0, im: 0.0 }));
    let out = encode_with(list, complex_fallback());
    assert_eq!(out[0], 0x5B);
    assert_eq!(out[out.len() - 1], 0x5D);
}

#[test]
fn inexpressible_record_fields_are_rejected() {
    let array = StructuredArray::new(
        vec![1],
        8,
        vec![FieldSpec::new("z", ElementKind::Complex64, 0)],
        vec![0u8; 8],
    )
    .unwrap();
    let err = encode_err(array, EncoderPreferences::default());
    assert!(matches!(err, EncodeError::InvalidStructuredArray(_)));
}
