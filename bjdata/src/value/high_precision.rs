// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of [`HighPrecision`], an arbitrary-precision
//! decimal number whose canonical textual form is what actually goes on the
//! wire.

use std::{fmt, str::FromStr};

use bigdecimal::BigDecimal;
use thiserror::Error;

/// An arbitrary-precision decimal number.
///
/// Finite values carry a [`BigDecimal`]; the non-finite values exist so a
/// host NaN or infinity can ride through the value model. The encoder
/// serializes finite values as their canonical text and non-finite values
/// as null, mirroring what it does for non-finite floats.
#[derive(Debug, Clone, PartialEq)]
pub enum HighPrecision {
    /// A finite decimal of arbitrary precision.
    Finite(BigDecimal),
    /// Positive infinity.
    Infinity,
    /// Negative infinity.
    NegInfinity,
    /// Not a number.
    NaN,
}

/// Error returned when parsing a high-precision literal.
#[derive(Debug, Error)]
#[error("Invalid high-precision literal: {0}")]
pub struct ParseHighPrecisionError(#[from] bigdecimal::ParseBigDecimalError);

impl HighPrecision {
    /// Whether the value is finite, i.e. has a decimal text serialization.
    pub fn is_finite(&self) -> bool {
        matches!(self, HighPrecision::Finite(_))
    }
}

impl From<BigDecimal> for HighPrecision {
    fn from(value: BigDecimal) -> Self {
        HighPrecision::Finite(value)
    }
}

impl fmt::Display for HighPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighPrecision::Finite(value) => write!(f, "{}", value),
            HighPrecision::Infinity => write!(f, "Infinity"),
            HighPrecision::NegInfinity => write!(f, "-Infinity"),
            HighPrecision::NaN => write!(f, "NaN"),
        }
    }
}

impl FromStr for HighPrecision {
    type Err = ParseHighPrecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let (negative, unsigned) = match t.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, t.strip_prefix('+').unwrap_or(t)),
        };
        if unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity") {
            return Ok(if negative {
                HighPrecision::NegInfinity
            } else {
                HighPrecision::Infinity
            });
        }
        if unsigned.eq_ignore_ascii_case("nan") {
            return Ok(HighPrecision::NaN);
        }
        Ok(HighPrecision::Finite(BigDecimal::from_str(t)?))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::HighPrecision;

    #[test]
    fn parse_specials() {
        assert_eq!(
            HighPrecision::from_str("Infinity").unwrap(),
            HighPrecision::Infinity
        );
        assert_eq!(
            HighPrecision::from_str("-inf").unwrap(),
            HighPrecision::NegInfinity
        );
        assert_eq!(HighPrecision::from_str("nan").unwrap(), HighPrecision::NaN);
        assert!(HighPrecision::from_str("bogus").is_err());
    }

    #[test]
    fn display_round_trips() {
        for text in ["14324.098", "-0.5", "123456789012345678901234567890"] {
            let value = HighPrecision::from_str(text).unwrap();
            assert!(value.is_finite());
            assert_eq!(value.to_string(), text);
        }
        assert_eq!(HighPrecision::NegInfinity.to_string(), "-Infinity");
    }
}
