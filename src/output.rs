//! Assembly of walked rows into the delivered text block.
//!
//! The output is the root header row and value row, each on its own line,
//! followed by two more lines for every nested block:
//!
//! ```text
//! b, a
//! 5
//! x,y
//! 1,2
//! ```
//!
//! for a record `{ b: { x: 1, y: 2 }, a: 5 }`. The nested field keeps its
//! name in the header row but has no token in the value row.

use crate::walker::ConversionContext;

/// Header and value rows produced for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    header: String,
    values: String,
    depth: usize,
}

impl Block {
    pub(crate) fn new(header: String, values: String, depth: usize) -> Self {
        Block {
            header,
            values,
            depth,
        }
    }

    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    #[must_use]
    pub fn values(&self) -> &str {
        &self.values
    }

    /// Nesting level of the record this block came from; the root is 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Both rows as two lines.
    #[must_use]
    pub fn assemble(&self) -> String {
        assemble(&self.header, &self.values)
    }
}

/// Joins a header row and a value row with a newline.
///
/// # Examples
///
/// ```rust
/// use serde_rowtext::assemble;
///
/// assert_eq!(assemble("a, b", "1, 2"), "a, b\n1, 2");
/// assert_eq!(assemble("", ""), "\n");
/// ```
#[must_use]
pub fn assemble(header: &str, values: &str) -> String {
    let mut out = String::with_capacity(header.len() + values.len() + 1);
    out.push_str(header);
    out.push('\n');
    out.push_str(values);
    out
}

/// Full output text for a finished walk. Empty when the root was not a record.
pub(crate) fn render(ctx: &ConversionContext) -> String {
    if !ctx.is_populated() {
        return String::new();
    }

    let mut out = assemble(ctx.header(), ctx.values());
    for block in ctx.blocks() {
        out.push('\n');
        out.push_str(&block.assemble());
    }
    out
}
