// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! Container behaviour: counted versus terminated forms, key ordering and
//! aliasing.

use super::{encode_default, encode_with};
use crate::{EncoderPreferences, List, Map, Value};

fn counted() -> EncoderPreferences {
    EncoderPreferences {
        container_count: true,
        ..Default::default()
    }
}

#[test]
fn counted_sequences_have_no_terminator() {
    let list = List::new();
    list.push(1u8);
    list.push(2u8);
    assert_eq!(
        encode_with(list, counted()),
        [0x5B, 0x23, 0x55, 0x02, 0x55, 0x01, 0x55, 0x02]
    );

    assert_eq!(encode_with(List::new(), counted()), [0x5B, 0x23, 0x55, 0x00]);
}

#[test]
fn counted_mappings_have_no_terminator() {
    let map = Map::new();
    map.insert("a", 1u8);
    assert_eq!(
        encode_with(map, counted()),
        [0x7B, 0x23, 0x55, 0x01, 0x55, 0x01, 0x61, 0x55, 0x01]
    );
}

#[test]
fn empty_containers() {
    assert_eq!(encode_default(List::new()), [0x5B, 0x5D]);
    assert_eq!(encode_default(Map::new()), [0x7B, 0x7D]);
}

#[test]
fn nested_containers() {
    let inner = Map::new();
    inner.insert("k", Value::Null);
    let list = List::new();
    list.push(inner);
    list.push(List::new());
    assert_eq!(
        encode_default(list),
        [0x5B, 0x7B, 0x55, 0x01, 0x6B, 0x5A, 0x7D, 0x5B, 0x5D, 0x5D]
    );
}

#[test]
fn sorted_keys_are_emitted_lexicographically() {
    let map = Map::new();
    map.insert("b", 2u8);
    map.insert("a", 1u8);
    map.insert("c", 3u8);
    let prefs = EncoderPreferences {
        sort_keys: true,
        ..Default::default()
    };
    assert_eq!(
        encode_with(map, prefs),
        [
            0x7B, 0x55, 0x01, 0x61, 0x55, 0x01, 0x55, 0x01, 0x62, 0x55, 0x02, 0x55, 0x01, 0x63,
            0x55, 0x03, 0x7D
        ]
    );
}

#[test]
fn sorted_output_is_independent_of_insertion_order() {
    let pairs = [("x", 1u8), ("m", 2u8), ("a", 3u8)];

    let forward = Map::new();
    for (k, v) in pairs {
        forward.insert(k, v);
    }
    let backward = Map::new();
    for (k, v) in pairs.iter().rev() {
        backward.insert(*k, *v);
    }

    let prefs = EncoderPreferences {
        sort_keys: true,
        ..Default::default()
    };
    let a = encode_with(forward, prefs);
    let prefs = EncoderPreferences {
        sort_keys: true,
        ..Default::default()
    };
    let b = encode_with(backward, prefs);
    assert_eq!(a, b);
}

#[test]
fn unsorted_mappings_keep_insertion_order() {
    let map = Map::new();
    map.insert("b", 1u8);
    map.insert("a", 2u8);
    assert_eq!(
        encode_default(map),
        [0x7B, 0x55, 0x01, 0x62, 0x55, 0x01, 0x55, 0x01, 0x61, 0x55, 0x02, 0x7D]
    );
}

#[test]
fn shared_values_are_not_cycles() {
    // The same list appearing twice is aliasing, not a cycle.
    let shared = List::new();
    shared.push(1u8);
    let root = List::new();
    root.push(shared.clone());
    root.push(shared);
    assert_eq!(
        encode_default(root),
        [0x5B, 0x5B, 0x55, 0x01, 0x5D, 0x5B, 0x55, 0x01, 0x5D, 0x5D]
    );
}
