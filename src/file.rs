//! Writing row text to disk.
//!
//! [`FileWriter`] overwrites the target file with the given content. With the
//! CSV gate on (the default), the path must end in `.csv`, compared
//! case-sensitively after surrounding whitespace is trimmed. Nothing is
//! retried and no parent directories are created.
//!
//! ```rust,no_run
//! use serde_rowtext::FileWriter;
//!
//! let ok = FileWriter::csv_only().write("stats.csv", "a, b\n1, 2");
//! assert!(ok);
//! assert!(!FileWriter::csv_only().write("stats.txt", "a, b\n1, 2"));
//! ```

use crate::{Error, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

const CSV_EXTENSION: &str = ".csv";

/// Writes content to a path, optionally requiring a `.csv` suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileWriter {
    require_csv_extension: bool,
}

impl Default for FileWriter {
    fn default() -> Self {
        Self::csv_only()
    }
}

impl FileWriter {
    #[must_use]
    pub const fn new(require_csv_extension: bool) -> Self {
        FileWriter {
            require_csv_extension,
        }
    }

    /// A writer that only accepts paths ending in `.csv`.
    #[must_use]
    pub const fn csv_only() -> Self {
        Self::new(true)
    }

    /// A writer that accepts any path.
    #[must_use]
    pub const fn any_extension() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub const fn requires_csv_extension(&self) -> bool {
        self.require_csv_extension
    }

    /// Writes `content` to `path`, returning `false` on any failure.
    ///
    /// Failures are logged at warn level and never panic.
    pub fn write(&self, path: &str, content: &str) -> bool {
        match self.try_write(path, content) {
            Ok(_) => true,
            Err(err) => {
                warn!(path = path.trim(), error = %err, "failed to write row text");
                false
            }
        }
    }

    /// Writes `content` to `path`, returning the trimmed path that was written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExtension`] when the CSV gate rejects the path
    /// and [`Error::Io`] when the write fails.
    pub fn try_write(&self, path: &str, content: &str) -> Result<PathBuf> {
        let path = path.trim();

        if self.require_csv_extension && !path.ends_with(CSV_EXTENSION) {
            return Err(Error::invalid_extension(path));
        }
        if path.is_empty() {
            return Err(Error::io("empty path"));
        }

        fs::write(path, content)?;
        debug!(path, bytes = content.len(), "wrote row text");
        Ok(PathBuf::from(path))
    }
}
