// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! Conversions from host types into [`Value`].

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::tensor::{StructuredArray, Tensor};

use super::{Foreign, HighPrecision, List, Map, Value};

macro_rules! impl_value_from_int {
    ($($tp: ty),*) => {
        $(
            impl From<$tp> for Value {
                fn from(value: $tp) -> Self {
                    Value::Int(BigInt::from(value))
                }
            }
        )*
    };
}

impl_value_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Int(value)
    }
}

impl From<BigDecimal> for Value {
    fn from(value: BigDecimal) -> Self {
        Value::Decimal(Box::new(HighPrecision::Finite(value)))
    }
}

impl From<HighPrecision> for Value {
    fn from(value: HighPrecision) -> Self {
        Value::Decimal(Box::new(value))
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Value::Sequence(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(List::from(value))
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Mapping(value)
    }
}

impl From<Tensor> for Value {
    fn from(value: Tensor) -> Self {
        Value::Tensor(Box::new(value))
    }
}

impl From<StructuredArray> for Value {
    fn from(value: StructuredArray) -> Self {
        Value::StructuredArray(Box::new(value))
    }
}

impl From<Foreign> for Value {
    fn from(value: Foreign) -> Self {
        Value::Foreign(value)
    }
}
