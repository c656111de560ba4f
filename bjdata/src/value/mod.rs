// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of [`Value`], the closed dynamic type universe
//! the encoder accepts, along with the shared [`List`] and [`Map`] containers.

mod foreign;
mod from;
mod high_precision;

pub use foreign::{Foreign, ForeignValue};
pub use high_precision::{HighPrecision, ParseHighPrecisionError};

use std::{
    cell::{Ref, RefCell},
    fmt,
    rc::Rc,
};

use num_bigint::BigInt;

use crate::tensor::{StructuredArray, Tensor};

/// A `Value` holds any of the dynamic types the encoder understands, from
/// null and scalars up to shared containers and N-D numeric arrays.
///
/// Larger payloads are boxed to keep the size of this type down a bit,
/// especially when used in sequences.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null value.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Arbitrary-precision integer.
    Int(BigInt),
    /// IEEE-754 double precision float.
    Float(f64),
    /// Arbitrary-precision decimal, serialized as text.
    Decimal(Box<HighPrecision>),
    /// Raw byte buffer.
    Bytes(Vec<u8>),
    /// Unicode text.
    Text(String),
    /// Ordered sequence of values behind a shared handle.
    Sequence(List),
    /// Ordered key/value pairs behind a shared handle.
    Mapping(Map),
    /// Homogeneous N-D numeric array.
    Tensor(Box<Tensor>),
    /// N-D array of named scalar fields.
    StructuredArray(Box<StructuredArray>),
    /// Host value with no native representation, left to the fallback.
    Foreign(Foreign),
}

impl Value {
    /// A short name for the dynamic type of this value, for error reporting.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::Bytes(_) => "bytes",
            Value::Text(_) => "text",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
            Value::Tensor(_) => "tensor",
            Value::StructuredArray(_) => "structured array",
            Value::Foreign(_) => "foreign",
        }
    }
}

/// This implementation is mainly for debugging / convenience purposes, to
/// eliminate some of the noise in scalar types from using the Debug trait.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Decimal(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
            value => write!(f, "{:?}", value),
        }
    }
}

/// An ordered sequence of values.
///
/// The items live behind a shared cell, so cloning a `List` produces a
/// second handle to the *same* sequence, matching the aliasing semantics
/// of the dynamic hosts this format serves. A list can therefore (directly
/// or transitively) contain itself; the encoder detects that by identity
/// and rejects it.
#[derive(Clone, Default)]
pub struct List {
    items: Rc<RefCell<Vec<Value>>>,
}

impl List {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value.
    pub fn push(&self, value: impl Into<Value>) {
        self.items.borrow_mut().push(value.into());
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Borrow the items for iteration.
    pub fn items(&self) -> Ref<'_, Vec<Value>> {
        self.items.borrow()
    }

    /// Stable identity of this list, used for cycle detection. Two handles
    /// compare equal here iff they share the underlying sequence.
    pub fn identity(&self) -> usize {
        Rc::as_ptr(&self.items) as *const () as usize
    }
}

impl From<Vec<Value>> for List {
    fn from(value: Vec<Value>) -> Self {
        Self {
            items: Rc::new(RefCell::new(value)),
        }
    }
}

impl FromIterator<Value> for List {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items) || *self.items.borrow() == *other.items.borrow()
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.borrow().iter()).finish()
    }
}

/// An ordered string-keyed mapping.
///
/// Pairs are kept in insertion order; `sort_keys` ordering is applied at
/// encode time without mutating the mapping. Keys are full [`Value`]s so a
/// non-text key is representable and fails with `BadKeyType` when encoded,
/// the producer contract being text keys without duplicates. Like [`List`],
/// cloning shares the underlying pairs and identity.
#[derive(Clone, Default)]
pub struct Map {
    entries: Rc<RefCell<Vec<(Value, Value)>>>,
}

impl Map {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key/value pair.
    pub fn insert(&self, key: impl Into<Value>, value: impl Into<Value>) {
        self.entries.borrow_mut().push((key.into(), value.into()));
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Borrow the pairs for iteration, in insertion order.
    pub fn entries(&self) -> Ref<'_, Vec<(Value, Value)>> {
        self.entries.borrow()
    }

    /// Stable identity of this mapping, used for cycle detection.
    pub fn identity(&self) -> usize {
        Rc::as_ptr(&self.entries) as *const () as usize
    }
}

impl From<Vec<(Value, Value)>> for Map {
    fn from(value: Vec<(Value, Value)>) -> Self {
        Self {
            entries: Rc::new(RefCell::new(value)),
        }
    }
}

impl FromIterator<(Value, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
            || *self.entries.borrow() == *other.entries.borrow()
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.borrow().iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{List, Map, Value};

    #[test]
    fn list_clone_shares_identity() {
        let a = List::new();
        a.push(1u8);
        let b = a.clone();
        b.push("two");
        assert_eq!(a.len(), 2);
        assert_eq!(a.identity(), b.identity());
        assert_ne!(a.identity(), List::new().identity());
    }

    #[test]
    fn map_keeps_insertion_order() {
        let m = Map::new();
        m.insert("b", 1u8);
        m.insert("a", 2u8);
        let entries = m.entries();
        assert_eq!(entries[0].0, Value::Text("b".into()));
        assert_eq!(entries[1].0, Value::Text("a".into()));
    }

    #[test]
    fn value_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::from(1i32).type_name(), "int");
        assert_eq!(Value::from("x").type_name(), "text");
    }
}
