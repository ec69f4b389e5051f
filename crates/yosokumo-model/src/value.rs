//! The tagged scalar carried by cells and specimen predictands.
//!
//! A [`ScalarValue`] holds exactly one of five kinds. The kind is fixed when
//! the value is built; the only way to "change" it is to replace the value.
//!
//! Each kind has two accessors: a panicking one (`natural()`, `integer()`, ...)
//! for callers that already know the kind, and an `as_*` variant returning
//! `Option` for callers that don't.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of a [`ScalarValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Empty,
    Natural,
    Integer,
    Real,
    Special,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Empty => "empty",
            ValueKind::Natural => "natural",
            ValueKind::Integer => "integer",
            ValueKind::Real => "real",
            ValueKind::Special => "special",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cell's content.
///
/// Equality compares kind first and then payload. There is no coercion
/// between kinds: `Natural(3)` is not equal to `Integer(3)`. `Real` payloads
/// compare with `f64` semantics, so `Real(NaN)` is not equal to itself.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ScalarValue {
    /// No value.
    #[default]
    Empty,
    /// Non-negative whole number.
    Natural(u64),
    /// Signed whole number.
    Integer(i64),
    /// Floating point number.
    Real(f64),
    /// Service-defined marker value (for example "missing" codes).
    Special(u64),
}

impl ScalarValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ScalarValue::Empty => ValueKind::Empty,
            ScalarValue::Natural(_) => ValueKind::Natural,
            ScalarValue::Integer(_) => ValueKind::Integer,
            ScalarValue::Real(_) => ValueKind::Real,
            ScalarValue::Special(_) => ValueKind::Special,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ScalarValue::Empty)
    }

    /// Payload of a `Natural` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is of any other kind.
    #[track_caller]
    pub fn natural(&self) -> u64 {
        match self {
            ScalarValue::Natural(n) => *n,
            other => wrong_kind(ValueKind::Natural, other.kind()),
        }
    }

    /// Payload of an `Integer` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is of any other kind.
    #[track_caller]
    pub fn integer(&self) -> i64 {
        match self {
            ScalarValue::Integer(n) => *n,
            other => wrong_kind(ValueKind::Integer, other.kind()),
        }
    }

    /// Payload of a `Real` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is of any other kind.
    #[track_caller]
    pub fn real(&self) -> f64 {
        match self {
            ScalarValue::Real(x) => *x,
            other => wrong_kind(ValueKind::Real, other.kind()),
        }
    }

    /// Payload of a `Special` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is of any other kind.
    #[track_caller]
    pub fn special(&self) -> u64 {
        match self {
            ScalarValue::Special(n) => *n,
            other => wrong_kind(ValueKind::Special, other.kind()),
        }
    }

    pub fn as_natural(&self) -> Option<u64> {
        match self {
            ScalarValue::Natural(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ScalarValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            ScalarValue::Real(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_special(&self) -> Option<u64> {
        match self {
            ScalarValue::Special(n) => Some(*n),
            _ => None,
        }
    }
}

#[track_caller]
fn wrong_kind(expected: ValueKind, actual: ValueKind) -> ! {
    panic!("scalar value accessed as {expected} but holds {actual}")
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Empty => f.write_str("empty"),
            ScalarValue::Natural(n) => write!(f, "natural({n})"),
            ScalarValue::Integer(n) => write!(f, "integer({n})"),
            ScalarValue::Real(x) => write!(f, "real({x})"),
            ScalarValue::Special(n) => write!(f, "special({n})"),
        }
    }
}
