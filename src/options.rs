//! Configuration options for row text output.
//!
//! This module provides types to customize the delimiters and limits used when
//! a record is rendered:
//!
//! - [`RowOptions`]: Main configuration struct
//! - [`Delimiter`]: Choice of separator for the top-level row, nested rows and sequences
//!
//! Both types implement `serde::Deserialize`, so a host can keep them in its own
//! configuration file.
//!
//! ## Examples
//!
//! ```rust
//! use serde_rowtext::{to_string_with_options, Delimiter, RowOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let options = RowOptions::new().with_row_delimiter(Delimiter::Tab);
//! let text = to_string_with_options(&Data { x: 1, y: 2 }, options).unwrap();
//! assert_eq!(text, "x\ty\n1\t2");
//! ```

use serde::{Deserialize, Serialize};

/// Separator placed between tokens.
///
/// # Examples
///
/// ```rust
/// use serde_rowtext::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_str(), ",");
/// assert_eq!(Delimiter::CommaSpace.as_str(), ", ");
/// assert_eq!(Delimiter::SpacedPipe.as_str(), " | ");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    Comma,
    #[default]
    CommaSpace,
    Tab,
    Pipe,
    SpacedPipe,
}

impl Delimiter {
    /// Returns the string representation of this delimiter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::CommaSpace => ", ",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
            Delimiter::SpacedPipe => " | ",
        }
    }
}

/// Configuration options for row text conversion.
///
/// The defaults produce `", "` between top-level tokens, `","` between tokens
/// of nested blocks and `" | "` between sequence elements.
///
/// # Examples
///
/// ```rust
/// use serde_rowtext::{Delimiter, RowOptions};
///
/// let options = RowOptions::new()
///     .with_nested_delimiter(Delimiter::CommaSpace)
///     .with_max_depth(4)
///     .allow_any_extension();
/// assert_eq!(options.max_depth, 4);
/// assert!(!options.require_csv_extension);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowOptions {
    pub row_delimiter: Delimiter,
    pub nested_delimiter: Delimiter,
    pub sequence_delimiter: Delimiter,
    pub require_csv_extension: bool,
    pub max_depth: usize,
}

impl Default for RowOptions {
    fn default() -> Self {
        RowOptions {
            row_delimiter: Delimiter::CommaSpace,
            nested_delimiter: Delimiter::Comma,
            sequence_delimiter: Delimiter::SpacedPipe,
            require_csv_extension: true,
            max_depth: 32,
        }
    }
}

impl RowOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delimiter for the top-level header and value rows.
    #[must_use]
    pub fn with_row_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.row_delimiter = delimiter;
        self
    }

    /// Sets the delimiter for the rows of nested blocks.
    #[must_use]
    pub fn with_nested_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.nested_delimiter = delimiter;
        self
    }

    /// Sets the delimiter placed between sequence elements inside the quotes.
    #[must_use]
    pub fn with_sequence_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.sequence_delimiter = delimiter;
        self
    }

    /// Sets the deepest nesting level that still produces a block.
    ///
    /// The root record is depth 0, its nested records are depth 1.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Lets file output accept any path, not only `*.csv`.
    #[must_use]
    pub fn allow_any_extension(mut self) -> Self {
        self.require_csv_extension = false;
        self
    }
}
