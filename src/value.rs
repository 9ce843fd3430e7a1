//! Reflected value representation.
//!
//! This module provides the [`Value`] enum, the crate's view of one reflected
//! value, together with the [`TypeKind`] classification used to format it.
//!
//! ## Core Types
//!
//! - [`Value`]: any reflected value (number, boolean, name, string, text, sequence, fixed array, record)
//! - [`Number`]: integers (including ones beyond `i64`) and floats
//! - [`TypeKind`]: the classification of a value, in resolution priority order
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_rowtext::{Value, TypeKind};
//!
//! let flag = Value::from(true);
//! let count = Value::from(42);
//! let label = Value::from("hello");
//!
//! assert_eq!(flag.kind(), TypeKind::Boolean);
//! assert_eq!(count.kind(), TypeKind::Integer);
//! assert_eq!(label.kind(), TypeKind::String);
//! ```
//!
//! ### Reflecting Rust Types
//!
//! ```rust
//! use serde_rowtext::{to_value, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 10, y: 20 }).unwrap();
//! if let Value::Record(record) = value {
//!     assert_eq!(record.len(), 2);
//! }
//! ```

use crate::Record;
use num_bigint::BigInt;
use std::fmt;

/// Classification of a reflected value.
///
/// Variants are declared in the order classifiers are tried: numeric kinds
/// first, then boolean, name, string, text, sequence, record, and finally
/// unsupported. `Ord` follows that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeKind {
    Integer,
    Float,
    Boolean,
    Name,
    String,
    Text,
    Sequence,
    Record,
    Unsupported,
}

impl TypeKind {
    /// Returns a lowercase label for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Integer => "integer",
            TypeKind::Float => "float",
            TypeKind::Boolean => "boolean",
            TypeKind::Name => "name",
            TypeKind::String => "string",
            TypeKind::Text => "text",
            TypeKind::Sequence => "sequence",
            TypeKind::Record => "record",
            TypeKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric value.
///
/// # Examples
///
/// ```rust
/// use serde_rowtext::Number;
///
/// assert!(Number::Integer(42).is_integer());
/// assert!(Number::Single(0.5).is_float());
/// assert_eq!(Number::Single(0.1).to_string(), "0.1");
/// assert_eq!(Number::from(u64::MAX).to_string(), "18446744073709551615");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    BigInteger(BigInt),
    Float(f64),
    Single(f32),
}

impl Number {
    /// Returns `true` for integer values of any width.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_) | Number::BigInteger(_))
    }

    /// Returns `true` for floating-point values of either precision.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_) | Number::Single(_))
    }

    /// Converts this number to an `i64` if it is an integer that fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::BigInteger(b) => i64::try_from(b).ok(),
            Number::Float(_) | Number::Single(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> TypeKind {
        if self.is_integer() {
            TypeKind::Integer
        } else {
            TypeKind::Float
        }
    }
}

// Display is the canonical token text: plain signed decimal for integers and the
// shortest round-trippable form for floats.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::BigInteger(b) => write!(f, "{}", b),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Single(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInteger(BigInt::from(value)),
        }
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInteger(BigInt::from(value)),
        }
    }
}

impl From<u128> for Number {
    fn from(value: u128) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::BigInteger(BigInt::from(value)),
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Single(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// One reflected value.
///
/// `Name`, `String` and `Text` all format as their raw text; they are kept
/// apart so hosts with distinct identifier, string and localized-text types can
/// report which one a field holds. Through serde, enum unit variants arrive as
/// `Name` and every other string as `String`.
///
/// `Array` is a fixed-size array. As the value of a field it gives the field
/// its arity (one value token per element); anywhere else it formats like a
/// `Sequence`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(Number),
    Boolean(bool),
    Name(String),
    String(String),
    Text(String),
    Sequence(Vec<Value>),
    Array(Vec<Value>),
    Record(Record),
    /// A value with no text form; carries a short description of what was skipped.
    Unsupported(&'static str),
}

impl Default for Value {
    fn default() -> Self {
        Value::Unsupported("unit")
    }
}

impl Value {
    /// Classifies this value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rowtext::{TypeKind, Value};
    ///
    /// assert_eq!(Value::from(2.5).kind(), TypeKind::Float);
    /// assert_eq!(Value::Array(vec![]).kind(), TypeKind::Sequence);
    /// assert_eq!(Value::Unsupported("unit").kind(), TypeKind::Unsupported);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TypeKind {
        match self {
            Value::Number(n) => n.kind(),
            Value::Boolean(_) => TypeKind::Boolean,
            Value::Name(_) => TypeKind::Name,
            Value::String(_) => TypeKind::String,
            Value::Text(_) => TypeKind::Text,
            Value::Sequence(_) | Value::Array(_) => TypeKind::Sequence,
            Value::Record(_) => TypeKind::Record,
            Value::Unsupported(_) => TypeKind::Unsupported,
        }
    }

    /// Returns `true` if the value is a record.
    #[inline]
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Returns `true` if the value is a sequence or fixed array.
    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_) | Value::Array(_))
    }

    /// Returns `true` if the value has no text form.
    #[inline]
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Value::Unsupported(_))
    }

    /// If the value is a boolean, returns it.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer that fits `i64`, returns it.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Returns the text of a name, string or text value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rowtext::Value;
    ///
    /// assert_eq!(Value::Name("Red".to_string()).as_str(), Some("Red"));
    /// assert_eq!(Value::from(1).as_str(), None);
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Name(s) | Value::String(s) | Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements of a sequence or fixed array.
    #[must_use]
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) | Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is a record, returns it.
    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Sequence(value.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_priority_order() {
        let mut kinds = vec![
            TypeKind::Unsupported,
            TypeKind::Record,
            TypeKind::Boolean,
            TypeKind::Integer,
            TypeKind::Text,
        ];
        kinds.sort();
        assert_eq!(
            kinds,
            vec![
                TypeKind::Integer,
                TypeKind::Boolean,
                TypeKind::Text,
                TypeKind::Record,
                TypeKind::Unsupported,
            ]
        );
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(Number::from(5u64), Number::Integer(5));
        assert!(matches!(Number::from(u64::MAX), Number::BigInteger(_)));
        assert_eq!(Number::from(-5i128), Number::Integer(-5));
        assert_eq!(
            Number::from(i128::MIN).to_string(),
            "-170141183460469231731687303715884105728"
        );
        assert_eq!(Number::from(u64::MAX).kind(), TypeKind::Integer);
    }

    #[test]
    fn test_float_text() {
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
        assert_eq!(Number::Float(-0.25).to_string(), "-0.25");
        assert_eq!(Number::Single(0.1).to_string(), "0.1");
        assert_eq!(Number::Float(1.0).to_string(), "1");
    }

    #[test]
    fn test_value_from_vec() {
        let value = Value::from(vec![1, 2, 3]);
        assert_eq!(value.kind(), TypeKind::Sequence);
        assert_eq!(value.as_slice().map(<[Value]>::len), Some(3));
        assert!(value.is_sequence());
        assert!(Value::Array(vec![Value::from(1)]).is_sequence());
        assert!(!Value::from("1, 2").is_sequence());
    }

    #[test]
    fn test_text_accessors() {
        assert_eq!(Value::Text("hi".into()).kind(), TypeKind::Text);
        assert_eq!(Value::Text("hi".into()).as_str(), Some("hi"));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(7u8).as_i64(), Some(7));
        assert!(Value::default().is_unsupported());
    }
}
