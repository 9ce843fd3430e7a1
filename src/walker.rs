//! Depth-first walk over a reflected record.
//!
//! [`ReflectionWalker`] visits the fields of a record in declaration order,
//! writing each field name to the header row and each formatted value to the
//! value row. Values are rendered by [`ValueFormatter`], which calls back into
//! the walker for nested records. A record-valued field keeps its header name
//! but has no value token; its rows live in the nested block. Every nested record gets its own header and
//! value rows, collected as a [`Block`] in the [`ConversionContext`] in
//! pre-order (a parent block comes before the blocks of its children).
//!
//! Each record is accumulated in a local row buffer and only merged into the
//! context once its fields are done, so sibling records never share buffers.
//!
//! ```rust
//! use serde_rowtext::{record, ConversionContext, ReflectionWalker, RowOptions};
//!
//! let value = record!({ "a": 5, "b": { "x": 1, "y": 2 } });
//! let options = RowOptions::default();
//! let mut ctx = ConversionContext::new();
//! ReflectionWalker::new(&options).walk(&value, &mut ctx);
//!
//! assert_eq!(ctx.header(), "a, b");
//! assert_eq!(ctx.values(), "5");
//! assert_eq!(ctx.blocks()[0].header(), "x,y");
//! assert_eq!(ctx.blocks()[0].values(), "1,2");
//! ```

use crate::format::ValueFormatter;
use crate::output::Block;
use crate::{Delimiter, Record, RowOptions, Value};
use tracing::{debug, trace};

/// Accumulators for one conversion.
///
/// The context is reset at the start of every walk and is only meaningful
/// once that walk has returned. Give each concurrent conversion its own
/// context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionContext {
    root: Block,
    blocks: Vec<Block>,
    populated: bool,
}

impl ConversionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all accumulated rows.
    pub fn reset(&mut self) {
        self.root = Block::default();
        self.blocks.clear();
        self.populated = false;
    }

    /// Header row of the root record, without a trailing delimiter.
    #[must_use]
    pub fn header(&self) -> &str {
        self.root.header()
    }

    /// Value row of the root record, without a trailing delimiter.
    #[must_use]
    pub fn values(&self) -> &str {
        self.root.values()
    }

    /// Nested blocks, in pre-order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// `true` once a record root has been walked. Non-record input leaves this `false`.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    fn reserve_block(&mut self) -> usize {
        self.blocks.push(Block::default());
        self.blocks.len() - 1
    }
}

/// Local header/value accumulators for one record.
struct RowBuffer<'d> {
    delimiter: &'d str,
    header: String,
    values: String,
}

impl<'d> RowBuffer<'d> {
    fn new(delimiter: &'d str) -> Self {
        RowBuffer {
            delimiter,
            header: String::with_capacity(64),
            values: String::with_capacity(64),
        }
    }

    fn push_header(&mut self, token: &str) {
        self.header.push_str(token);
        self.header.push_str(self.delimiter);
    }

    fn push_value(&mut self, token: &str) {
        self.values.push_str(token);
        self.values.push_str(self.delimiter);
    }

    fn finish(self, depth: usize) -> Block {
        Block::new(
            trim_trailing(self.header, self.delimiter),
            trim_trailing(self.values, self.delimiter),
            depth,
        )
    }
}

/// Drops exactly one trailing delimiter. Buffers that do not end with it,
/// including empty ones, are returned unchanged.
fn trim_trailing(mut buffer: String, delimiter: &str) -> String {
    if buffer.ends_with(delimiter) {
        buffer.truncate(buffer.len() - delimiter.len());
    }
    buffer
}

/// Walks records and drives value formatting.
pub struct ReflectionWalker<'o> {
    options: &'o RowOptions,
}

impl<'o> ReflectionWalker<'o> {
    #[must_use]
    pub fn new(options: &'o RowOptions) -> Self {
        ReflectionWalker { options }
    }

    #[must_use]
    pub fn options(&self) -> &RowOptions {
        self.options
    }

    /// Resets `ctx` and walks `value` as the root record.
    ///
    /// A value that is not a record leaves the context empty.
    pub fn walk(&self, value: &Value, ctx: &mut ConversionContext) {
        ctx.reset();

        let Some(record) = value.as_record() else {
            debug!(kind = %value.kind(), "input is not a record, producing empty output");
            return;
        };

        ctx.root = self.walk_record(record, 0, self.options.row_delimiter, ctx);
        ctx.populated = true;
    }

    /// Walks a record below the root, appending its block to `ctx`.
    pub(crate) fn walk_nested(&self, record: &Record, depth: usize, ctx: &mut ConversionContext) {
        if depth > self.options.max_depth {
            debug!(
                depth,
                max_depth = self.options.max_depth,
                "nested record exceeds depth limit, skipping"
            );
            return;
        }

        // reserve first so this block precedes the blocks of its children
        let slot = ctx.reserve_block();
        let block = self.walk_record(record, depth, self.options.nested_delimiter, ctx);
        ctx.blocks[slot] = block;
    }

    fn walk_record(
        &self,
        record: &Record,
        depth: usize,
        delimiter: Delimiter,
        ctx: &mut ConversionContext,
    ) -> Block {
        trace!(depth, fields = record.len(), "walking record");

        let formatter = ValueFormatter::new(self, depth);
        let mut row = RowBuffer::new(delimiter.as_str());

        for field in record {
            row.push_header(field.name());
            for index in 0..field.arity() {
                let token = match field.value_at(index) {
                    Some(value) => formatter.format(value, ctx),
                    None => Some(String::new()),
                };
                if let Some(token) = token {
                    row.push_value(&token);
                }
            }
        }

        row.finish(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{record, Field};

    fn walk(value: &Value) -> ConversionContext {
        let options = RowOptions::default();
        let mut ctx = ConversionContext::new();
        ReflectionWalker::new(&options).walk(value, &mut ctx);
        ctx
    }

    #[test]
    fn test_flat_record() {
        let ctx = walk(&record!({ "id": 7, "name": "Widget", "active": true }));
        assert_eq!(ctx.header(), "id, name, active");
        assert_eq!(ctx.values(), "7, Widget, True");
        assert!(ctx.blocks().is_empty());
        assert!(ctx.is_populated());
    }

    #[test]
    fn test_non_record_input_is_noop() {
        let ctx = walk(&Value::from(5));
        assert_eq!(ctx.header(), "");
        assert_eq!(ctx.values(), "");
        assert!(!ctx.is_populated());

        let ctx = walk(&Value::Unsupported("none"));
        assert!(!ctx.is_populated());
    }

    #[test]
    fn test_empty_record() {
        let ctx = walk(&Value::Record(Record::new()));
        assert_eq!(ctx.header(), "");
        assert_eq!(ctx.values(), "");
        assert!(ctx.is_populated());
    }

    #[test]
    fn test_fixed_array_field_emits_one_value_per_element() {
        let mut rec = Record::new();
        rec.push_field(Field::fixed(
            "pos",
            vec![Value::from(1), Value::from(2), Value::from(3)],
        ));
        rec.insert("w", Value::from(4));
        let ctx = walk(&Value::Record(rec));
        assert_eq!(ctx.header(), "pos, w");
        assert_eq!(ctx.values(), "1, 2, 3, 4");
    }

    #[test]
    fn test_nested_blocks_are_pre_order() {
        let value = record!({
            "b": { "c": { "z": 9 }, "w": 3 },
            "d": { "k": 1 }
        });
        let ctx = walk(&value);
        assert_eq!(ctx.header(), "b, d");
        assert_eq!(ctx.values(), "");

        let blocks: Vec<_> = ctx
            .blocks()
            .iter()
            .map(|b| (b.header(), b.values(), b.depth()))
            .collect();
        assert_eq!(
            blocks,
            vec![("c,w", "3", 1), ("z", "9", 2), ("k", "1", 1)]
        );
    }

    #[test]
    fn test_trailing_record_field_leaves_no_delimiter() {
        let ctx = walk(&record!({ "a": 5, "b": { "x": 1, "y": 2 } }));
        assert_eq!(ctx.header(), "a, b");
        assert_eq!(ctx.values(), "5");
        assert_eq!(ctx.blocks()[0].values(), "1,2");

        let ctx = walk(&record!({ "id": 1, "items": [{ "q": 2 }, { "q": 3 }] }));
        assert_eq!(ctx.values(), "1");
        assert_eq!(ctx.blocks().len(), 2);
    }

    #[test]
    fn test_unsupported_field_keeps_empty_column() {
        let ctx = walk(&record!({ "a": 1, "gone": null }));
        assert_eq!(ctx.header(), "a, gone");
        assert_eq!(ctx.values(), "1, ");
    }

    #[test]
    fn test_sibling_records_do_not_share_buffers() {
        let value = record!({ "left": { "a": 1 }, "right": { "b": 2 } });
        let ctx = walk(&value);
        assert_eq!(ctx.blocks()[0].header(), "a");
        assert_eq!(ctx.blocks()[1].header(), "b");
        assert_eq!(ctx.blocks()[1].values(), "2");
    }

    #[test]
    fn test_depth_limit_skips_deep_records() {
        let options = RowOptions::new().with_max_depth(1);
        let value = record!({ "a": { "b": { "c": 1 } } });
        let mut ctx = ConversionContext::new();
        ReflectionWalker::new(&options).walk(&value, &mut ctx);

        assert_eq!(ctx.blocks().len(), 1);
        assert_eq!(ctx.blocks()[0].header(), "b");
        assert_eq!(ctx.blocks()[0].values(), "");
    }

    #[test]
    fn test_walk_resets_previous_state() {
        let options = RowOptions::default();
        let walker = ReflectionWalker::new(&options);
        let mut ctx = ConversionContext::new();

        walker.walk(&record!({ "a": { "x": 1 } }), &mut ctx);
        assert_eq!(ctx.blocks().len(), 1);

        walker.walk(&record!({ "b": 2 }), &mut ctx);
        assert_eq!(ctx.header(), "b");
        assert!(ctx.blocks().is_empty());
    }

    #[test]
    fn test_trim_trailing() {
        assert_eq!(trim_trailing("a, b, ".to_string(), ", "), "a, b");
        assert_eq!(trim_trailing(String::new(), ", "), "");
        assert_eq!(trim_trailing(",".to_string(), ", "), ",");
        assert_eq!(trim_trailing("x,,".to_string(), ","), "x,");
    }
}
