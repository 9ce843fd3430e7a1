//! Error types for reflecting values and writing row text.
//!
//! Walking a record and formatting its values never fails: unsupported values
//! turn into empty tokens and non-record input turns into empty output. The
//! errors here come from the two edges of a conversion:
//!
//! - **Reflection**: a `Serialize` impl reports a custom error, or a map uses a
//!   key that has no text form
//! - **File output**: the target path fails the `.csv` gate, or the write itself fails
//!
//! ## Examples
//!
//! ```rust
//! use serde_rowtext::Error;
//!
//! let err = Error::invalid_extension("report.txt");
//! assert!(err.to_string().contains("report.txt"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while reflecting or persisting rows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// Output path does not carry the required `.csv` suffix
    #[error("Invalid file extension for '{path}': expected a path ending in .csv")]
    InvalidExtension { path: String },

    /// Map key that cannot be rendered as a field name
    #[error("Unsupported map key: {0}")]
    UnsupportedKey(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for file writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an extension error for a path rejected by the `.csv` gate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rowtext::Error;
    ///
    /// let err = Error::invalid_extension("out.txt");
    /// assert!(matches!(err, Error::InvalidExtension { .. }));
    /// ```
    pub fn invalid_extension(path: &str) -> Self {
        Error::InvalidExtension {
            path: path.to_string(),
        }
    }

    /// Creates an error for a map key that has no text form.
    pub fn unsupported_key(kind: &str) -> Self {
        Error::UnsupportedKey(kind.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rowtext::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
