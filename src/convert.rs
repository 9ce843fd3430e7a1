//! Stateful conversion with query access to the last result.
//!
//! A [`Converter`] owns one [`ConversionContext`] and the text of the most
//! recent conversion. Every call to [`Converter::convert`] starts from a clean
//! state, and the accessors return empty text until something has been
//! converted. Conversions take `&mut self`, so one instance never has two
//! conversions in flight; give each thread its own converter or put one
//! behind a lock.
//!
//! ```rust
//! use serde_rowtext::Converter;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Sample { id: u32, score: f64, passed: bool }
//!
//! let mut converter = Converter::default();
//! assert_eq!(converter.output(), "");
//!
//! converter.convert(&Sample { id: 3, score: 0.75, passed: true }).unwrap();
//! assert_eq!(converter.header_names(), "id, score, passed");
//! assert_eq!(converter.values(), "3, 0.75, True");
//! assert_eq!(converter.output(), "id, score, passed\n3, 0.75, True");
//! ```

use crate::output::{render, Block};
use crate::ser::to_value;
use crate::walker::{ConversionContext, ReflectionWalker};
use crate::{FileWriter, Result, RowOptions, Value};
use serde::Serialize;
use tracing::debug;

/// Converts records to row text and keeps the last result.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: RowOptions,
    context: ConversionContext,
    output: String,
}

impl Converter {
    #[must_use]
    pub fn new(options: RowOptions) -> Self {
        Converter {
            options,
            context: ConversionContext::new(),
            output: String::new(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &RowOptions {
        &self.options
    }

    /// Reflects `value` and converts it, returning the full output text.
    ///
    /// # Errors
    ///
    /// Returns an error if `value`'s `Serialize` impl fails or it contains a
    /// map key with no text form. The converter is left empty in that case.
    pub fn convert<T>(&mut self, value: &T) -> Result<&str>
    where
        T: ?Sized + Serialize,
    {
        self.reset();
        let value = to_value(value)?;
        Ok(self.convert_value(&value))
    }

    /// Converts an already reflected value, returning the full output text.
    pub fn convert_value(&mut self, value: &Value) -> &str {
        ReflectionWalker::new(&self.options).walk(value, &mut self.context);
        self.output = render(&self.context);

        debug!(
            blocks = self.context.blocks().len(),
            bytes = self.output.len(),
            "converted record to row text"
        );
        &self.output
    }

    /// Clears the last result.
    pub fn reset(&mut self) {
        self.context.reset();
        self.output.clear();
    }

    /// Header row of the last converted root record.
    #[must_use]
    pub fn header_names(&self) -> &str {
        self.context.header()
    }

    /// Value row of the last converted root record.
    #[must_use]
    pub fn values(&self) -> &str {
        self.context.values()
    }

    /// Nested blocks of the last conversion, in pre-order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        self.context.blocks()
    }

    /// Full text of the last conversion.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Writes the last output to `path`, honouring the CSV gate in the options.
    pub fn write_output(&self, path: &str) -> bool {
        FileWriter::new(self.options.require_csv_extension).write(path, &self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{record, Error};
    use serde::ser::{Error as _, Serializer};
    use std::fs;
    use tempfile::TempDir;

    struct Failing;

    impl Serialize for Failing {
        fn serialize<S: Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("refused"))
        }
    }

    #[test]
    fn test_queries_empty_before_conversion() {
        let converter = Converter::default();
        assert_eq!(converter.header_names(), "");
        assert_eq!(converter.values(), "");
        assert_eq!(converter.output(), "");
        assert!(converter.blocks().is_empty());
    }

    #[test]
    fn test_convert_value_twice_is_identical() {
        let value = record!({ "a": 1, "b": { "c": [1, 2] } });
        let mut converter = Converter::default();
        let first = converter.convert_value(&value).to_string();
        let second = converter.convert_value(&value).to_string();
        assert_eq!(first, second);
        assert_eq!(first, "a, b\n1\nc\n\"1 | 2\"");
    }

    #[test]
    fn test_failed_conversion_leaves_converter_empty() {
        let mut converter = Converter::default();
        converter.convert_value(&record!({ "a": 1 }));

        let err = converter.convert(&Failing).unwrap_err();
        assert_eq!(err, Error::Custom("refused".to_string()));
        assert_eq!(converter.output(), "");
        assert_eq!(converter.header_names(), "");
    }

    #[test]
    fn test_reset() {
        let mut converter = Converter::default();
        converter.convert_value(&record!({ "a": { "b": 1 } }));
        assert_eq!(converter.blocks().len(), 1);

        converter.reset();
        assert_eq!(converter.output(), "");
        assert!(converter.blocks().is_empty());
    }

    #[test]
    fn test_write_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("row.csv");

        let mut converter = Converter::default();
        converter.convert_value(&record!({ "x": 1 }));
        assert!(converter.write_output(path.to_str().unwrap()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "x\n1");

        let txt = dir.path().join("row.txt");
        assert!(!converter.write_output(txt.to_str().unwrap()));

        let relaxed = Converter::new(RowOptions::new().allow_any_extension());
        assert!(relaxed.write_output(txt.to_str().unwrap()));
        assert_eq!(fs::read_to_string(&txt).unwrap(), "");
    }
}
