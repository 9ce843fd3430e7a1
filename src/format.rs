//! Canonical text for single values.
//!
//! | Kind | Text |
//! |------|------|
//! | Integer | signed decimal, no grouping |
//! | Float | shortest round-trippable decimal |
//! | Boolean | `True` / `False` |
//! | Name, String, Text | the text itself, unescaped |
//! | Sequence | elements joined with `" | "`, wrapped in `"` |
//! | Record | no token; the record is walked and emitted as a nested block |
//! | Unsupported | empty |
//!
//! Sequences that hold only records (or only such sequences) produce no token
//! either; each record inside becomes a nested block.
//!
//! Text values are not escaped, so a string containing the row delimiter will
//! split its column when the output is read back.

use crate::walker::{ConversionContext, ReflectionWalker};
use crate::{RowOptions, Value};
use tracing::debug;

const QUOTE: char = '"';

/// Renders values for one depth of a walk.
pub struct ValueFormatter<'w> {
    walker: &'w ReflectionWalker<'w>,
    depth: usize,
}

impl<'w> ValueFormatter<'w> {
    /// Creates a formatter for values found in a record at `depth`.
    #[must_use]
    pub fn new(walker: &'w ReflectionWalker<'w>, depth: usize) -> Self {
        ValueFormatter { walker, depth }
    }

    /// Returns the token for `value`, or `None` when the value was emitted
    /// as nested blocks instead.
    ///
    /// Records, and sequences made only of records, add one nested block per
    /// record to `ctx` and have no place in the value row.
    pub fn format(&self, value: &Value, ctx: &mut ConversionContext) -> Option<String> {
        match value {
            Value::Number(n) => Some(n.to_string()),
            Value::Boolean(b) => Some(boolean_literal(*b).to_string()),
            Value::Name(s) | Value::String(s) | Value::Text(s) => Some(s.clone()),
            Value::Sequence(items) | Value::Array(items) => self.format_sequence(items, ctx),
            Value::Record(record) => {
                self.walker.walk_nested(record, self.depth + 1, ctx);
                None
            }
            Value::Unsupported(what) => {
                debug!(what, depth = self.depth, "skipping unsupported value");
                Some(String::new())
            }
        }
    }

    fn format_sequence(&self, items: &[Value], ctx: &mut ConversionContext) -> Option<String> {
        if holds_only_records(items) {
            for item in items {
                self.format(item, ctx);
            }
            return None;
        }

        let delimiter = self.walker.options().sequence_delimiter.as_str();
        let mut out = String::with_capacity(items.len() * 4 + 2);
        out.push(QUOTE);
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push_str(delimiter);
            }
            // record elements of a mixed sequence keep an empty slot
            out.push_str(&self.format(item, ctx).unwrap_or_default());
        }
        out.push(QUOTE);
        Some(out)
    }
}

/// `true` for a non-empty sequence whose elements are records or sequences
/// that themselves hold only records.
fn holds_only_records(items: &[Value]) -> bool {
    !items.is_empty()
        && items.iter().all(|item| match item {
            Value::Record(_) => true,
            Value::Sequence(inner) | Value::Array(inner) => holds_only_records(inner),
            _ => false,
        })
}

#[inline]
const fn boolean_literal(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Formats a single value outside of any walk.
///
/// Values that would become nested blocks render as an empty string; the
/// blocks themselves are discarded.
///
/// # Examples
///
/// ```rust
/// use serde_rowtext::{format_value, RowOptions, Value};
///
/// let options = RowOptions::default();
/// assert_eq!(format_value(&Value::from(vec![1, 2, 3]), &options), "\"1 | 2 | 3\"");
/// assert_eq!(format_value(&Value::from(false), &options), "False");
/// ```
#[must_use]
pub fn format_value(value: &Value, options: &RowOptions) -> String {
    let walker = ReflectionWalker::new(options);
    let mut scratch = ConversionContext::new();
    ValueFormatter::new(&walker, 0)
        .format(value, &mut scratch)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{record, Delimiter, Number, Record};

    fn fmt(value: Value) -> String {
        format_value(&value, &RowOptions::default())
    }

    #[test]
    fn test_numbers() {
        assert_eq!(fmt(Value::from(-42)), "-42");
        assert_eq!(fmt(Value::from(1_000_000)), "1000000");
        assert_eq!(fmt(Value::from(2.5)), "2.5");
        assert_eq!(fmt(Value::from(0.1f32)), "0.1");
        assert_eq!(fmt(Value::from(u64::MAX)), "18446744073709551615");
        assert_eq!(fmt(Value::Number(Number::Float(f64::NAN))), "NaN");
    }

    #[test]
    fn test_boolean_literals() {
        assert_eq!(fmt(Value::from(true)), "True");
        assert_eq!(fmt(Value::from(false)), "False");
    }

    #[test]
    fn test_text_is_not_escaped() {
        assert_eq!(fmt(Value::from("a, b")), "a, b");
        assert_eq!(fmt(Value::Name("Red".into())), "Red");
        assert_eq!(fmt(Value::Text("say \"hi\"".into())), "say \"hi\"");
    }

    #[test]
    fn test_sequences() {
        assert_eq!(fmt(Value::from(vec![1, 2, 3])), "\"1 | 2 | 3\"");
        assert_eq!(fmt(Value::Sequence(vec![])), "\"\"");
        assert_eq!(fmt(Value::from(vec!["only"])), "\"only\"");
        assert_eq!(
            fmt(Value::Sequence(vec![Value::from(vec![1, 2]), Value::from(vec![3])])),
            "\"\"1 | 2\" | \"3\"\""
        );
        assert_eq!(
            fmt(Value::Sequence(vec![Value::from(1), Value::Unsupported("none")])),
            "\"1 | \""
        );
    }

    #[test]
    fn test_custom_sequence_delimiter() {
        let options = RowOptions::new().with_sequence_delimiter(Delimiter::Pipe);
        assert_eq!(format_value(&Value::from(vec![1, 2]), &options), "\"1|2\"");
    }

    #[test]
    fn test_record_and_unsupported_are_empty() {
        assert_eq!(fmt(record!({ "x": 1 })), "");
        assert_eq!(fmt(Value::Unsupported("unit")), "");
    }

    #[test]
    fn test_record_sequence_walks_each_element() {
        let options = RowOptions::default();
        let walker = ReflectionWalker::new(&options);
        let mut ctx = ConversionContext::new();
        let items = Value::Sequence(vec![record!({ "a": 1 }), record!({ "a": 2 })]);

        let token = ValueFormatter::new(&walker, 0).format(&items, &mut ctx);
        assert_eq!(token, None);
        assert_eq!(ctx.blocks().len(), 2);
        assert_eq!(ctx.blocks()[1].values(), "2");
        assert_eq!(ctx.blocks()[1].depth(), 1);
    }

    #[test]
    fn test_mixed_sequence_keeps_scalars_inline() {
        let options = RowOptions::default();
        let walker = ReflectionWalker::new(&options);
        let mut ctx = ConversionContext::new();
        let items = Value::Sequence(vec![Value::from(1), Value::Record(Record::new())]);

        let token = ValueFormatter::new(&walker, 0).format(&items, &mut ctx);
        assert_eq!(token.as_deref(), Some("\"1 | \""));
        assert_eq!(ctx.blocks().len(), 1);
    }

    #[test]
    fn test_record_gives_no_token() {
        let options = RowOptions::default();
        let walker = ReflectionWalker::new(&options);
        let mut ctx = ConversionContext::new();
        let formatter = ValueFormatter::new(&walker, 0);

        assert_eq!(formatter.format(&record!({ "x": 1 }), &mut ctx), None);
        assert_eq!(
            formatter.format(&Value::Unsupported("none"), &mut ctx),
            Some(String::new())
        );
        assert_eq!(ctx.blocks().len(), 1);
    }

    #[test]
    fn test_sequence_of_record_sequences_gives_no_token() {
        let options = RowOptions::default();
        let walker = ReflectionWalker::new(&options);
        let mut ctx = ConversionContext::new();
        let grid = Value::Sequence(vec![
            Value::Sequence(vec![record!({ "x": 1, "y": 2 })]),
            Value::Sequence(vec![record!({ "x": 3, "y": 4 })]),
        ]);

        let token = ValueFormatter::new(&walker, 0).format(&grid, &mut ctx);
        assert_eq!(token, None);
        let values: Vec<_> = ctx.blocks().iter().map(|b| b.values()).collect();
        assert_eq!(values, vec!["1,2", "3,4"]);
        assert!(ctx.blocks().iter().all(|b| b.depth() == 1));
    }

    #[test]
    fn test_sequence_with_empty_inner_sequence_stays_inline() {
        let items = Value::Sequence(vec![
            Value::Sequence(vec![record!({ "a": 1 })]),
            Value::Sequence(vec![]),
        ]);
        assert_eq!(fmt(items), "\" | \"\"\"");
    }
}
