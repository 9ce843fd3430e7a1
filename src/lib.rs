//! # serde_rowtext
//!
//! Walks any `Serialize` value as a reflected record and renders it as a flat,
//! delimited header row and value row, ready to append to a CSV-like log.
//!
//! ## How It Works
//!
//! 1. The value is reflected into a [`Value`] through serde. Structs and
//!    string-keyed maps become [`Record`]s with ordered [`Field`]s.
//! 2. [`ReflectionWalker`] visits the fields depth-first. Each field name goes
//!    to the header row; each value is rendered by [`ValueFormatter`].
//! 3. Nested records do not inline into their parent's row. They keep their
//!    header name, add nothing to the value row and get their own two-line
//!    block below.
//! 4. The rows are assembled into the final text and can be written to a `.csv` file.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use serde_rowtext::to_string;
//!
//! #[derive(Serialize)]
//! struct Reading {
//!     sensor: String,
//!     value: f64,
//!     valid: bool,
//!     history: Vec<i32>,
//! }
//!
//! let reading = Reading {
//!     sensor: "north".to_string(),
//!     value: 21.5,
//!     valid: true,
//!     history: vec![20, 21, 22],
//! };
//!
//! let text = to_string(&reading).unwrap();
//! assert_eq!(
//!     text,
//!     "sensor, value, valid, history\nnorth, 21.5, True, \"20 | 21 | 22\""
//! );
//! ```
//!
//! ### Nested Records
//!
//! ```rust
//! use serde::Serialize;
//! use serde_rowtext::to_string;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! #[derive(Serialize)]
//! struct Marker { id: u32, at: Point }
//!
//! let text = to_string(&Marker { id: 5, at: Point { x: 1, y: 2 } }).unwrap();
//! assert_eq!(text, "id, at\n5\nx,y\n1,2");
//! ```
//!
//! ## Row Format
//!
//! | Element | Text |
//! |---------|------|
//! | Top-level token separator | `", "` |
//! | Nested block token separator | `","` |
//! | Sequence | `"e1 | e2 | e3"`, quotes included, `""` when empty |
//! | Boolean | `True` / `False` |
//! | Nested record, sequence of records | header name only; rows in a nested block |
//! | Unsupported value (`None`, `()`) | empty token, column kept |
//!
//! Text values are written as-is. A string containing the separator is not
//! quoted or escaped.
//!
//! ## Input That Is Not a Record
//!
//! Scalars, sequences and `None` at the root produce empty output rather than
//! an error.

pub mod convert;
pub mod error;
pub mod file;
pub mod format;
pub mod macros;
pub mod options;
pub mod output;
pub mod record;
pub mod ser;
pub mod value;
pub mod walker;

pub use convert::Converter;
pub use error::{Error, Result};
pub use file::FileWriter;
pub use format::{format_value, ValueFormatter};
pub use options::{Delimiter, RowOptions};
pub use output::{assemble, Block};
pub use record::{Field, Record};
pub use ser::ValueSerializer;
pub use value::{Number, TypeKind, Value};
pub use walker::{ConversionContext, ReflectionWalker};

use serde::Serialize;
use std::io;

/// Convert any `T: Serialize` to row text.
///
/// # Examples
///
/// ```rust
/// use serde_rowtext::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "x, y\n1, 2");
/// assert_eq!(to_string(&42).unwrap(), "");
/// ```
///
/// # Errors
///
/// Returns an error if the value's `Serialize` impl fails or a map key has no text form.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, RowOptions::default())
}

/// Convert any `T: Serialize` to row text with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be reflected.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: RowOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut converter = Converter::new(options);
    converter.convert(value)?;
    Ok(converter.output().to_string())
}

/// Convert an already reflected [`Value`] to row text with default options.
#[must_use]
pub fn to_string_value(value: &Value) -> String {
    let mut converter = Converter::default();
    converter.convert_value(value).to_string()
}

/// Reflect any `T: Serialize` into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_rowtext::{to_value, TypeKind};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(value.kind(), TypeKind::Record);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be reflected.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    ser::to_value(value)
}

/// Convert any `T: Serialize` to row text and write it to `writer`.
///
/// # Errors
///
/// Returns an error if reflection fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, RowOptions::default())
}

/// Convert any `T: Serialize` to row text with custom options and write it to `writer`.
///
/// # Errors
///
/// Returns an error if reflection fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: RowOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Write `content` to a `.csv` file at `path`, overwriting it.
///
/// Returns `false` if the trimmed path does not end in `.csv` or the write fails.
/// Use [`FileWriter`] for other extensions or to get the error.
pub fn write_to_file(path: &str, content: &str) -> bool {
    FileWriter::csv_only().write(path, content)
}
