//! Reflected records and their fields.
//!
//! A [`Record`] is an ordered collection of named [`Field`]s, backed by
//! [`IndexMap`] so that fields are walked in declaration order. Each field
//! exposes the reflection surface the walker needs: `name()`, `type_kind()`,
//! `arity()` and `value_at(index)`.
//!
//! ## Examples
//!
//! ```rust
//! use serde_rowtext::{Record, TypeKind, Value};
//!
//! let mut record = Record::new();
//! record.insert("id", Value::from(7));
//! record.insert("pos", Value::Array(vec![Value::from(1), Value::from(2)]));
//!
//! let pos = record.get("pos").unwrap();
//! assert_eq!(pos.type_kind(), TypeKind::Integer);
//! assert_eq!(pos.arity(), 2);
//! ```

use crate::{TypeKind, Value};
use indexmap::IndexMap;

/// One named slot of a record.
///
/// A field holds `arity` values. Plain fields have arity 1; fixed-size array
/// fields have one value per element. Arity is never zero: an empty fixed
/// array is stored as a single unsupported value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    values: Vec<Value>,
}

impl Field {
    /// Creates a field from a reflected value.
    ///
    /// A [`Value::Array`] is unpacked into the field's elements; every other
    /// value becomes a field of arity 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rowtext::{Field, Value};
    ///
    /// assert_eq!(Field::new("n", Value::from(1)).arity(), 1);
    /// assert_eq!(Field::new("a", Value::Array(vec![1.into(), 2.into(), 3.into()])).arity(), 3);
    /// assert_eq!(Field::new("e", Value::Array(vec![])).arity(), 1);
    /// ```
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        match value {
            Value::Array(items) => Self::fixed(name, items),
            other => Field {
                name: name.into(),
                values: vec![other],
            },
        }
    }

    /// Creates a fixed-size array field with one value per element.
    pub fn fixed(name: impl Into<String>, mut values: Vec<Value>) -> Self {
        if values.is_empty() {
            values.push(Value::Unsupported("empty array"));
        }
        Field {
            name: name.into(),
            values,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind of the field's elements, taken from the first one.
    #[must_use]
    pub fn type_kind(&self) -> TypeKind {
        self.values
            .first()
            .map_or(TypeKind::Unsupported, Value::kind)
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn values(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }
}

/// An ordered map of field names to fields.
///
/// Inserting a name that is already present replaces that field in place,
/// keeping its original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record(IndexMap<String, Field>);

impl Record {
    /// Creates an empty `Record`.
    #[must_use]
    pub fn new() -> Self {
        Record(IndexMap::new())
    }

    /// Creates an empty `Record` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Record(IndexMap::with_capacity(capacity))
    }

    /// Inserts a field built from `value`, returning the field it replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rowtext::{Record, Value};
    ///
    /// let mut record = Record::new();
    /// assert!(record.insert("key", Value::from(42)).is_none());
    /// assert!(record.insert("key", Value::from(43)).is_some());
    /// assert_eq!(record.len(), 1);
    /// ```
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Field> {
        self.push_field(Field::new(name, value))
    }

    /// Inserts a prepared field, returning the field it replaced.
    pub fn push_field(&mut self, field: Field) -> Option<Field> {
        self.0.insert(field.name.clone(), field)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.0.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the field names, in declaration order.
    pub fn names(&self) -> indexmap::map::Keys<'_, String, Field> {
        self.0.keys()
    }

    /// Returns an iterator over the fields, in declaration order.
    pub fn fields(&self) -> indexmap::map::Values<'_, String, Field> {
        self.0.values()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Field;
    type IntoIter = indexmap::map::Values<'a, String, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}

impl IntoIterator for Record {
    type Item = Field;
    type IntoIter = indexmap::map::IntoValues<String, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_values()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl FromIterator<Field> for Record {
    fn from_iter<T: IntoIterator<Item = Field>>(iter: T) -> Self {
        let mut record = Record::new();
        for field in iter {
            record.push_field(field);
        }
        record
    }
}
