//! Unified error types for chatsheet.
//!
//! This module provides a single [`ChatsheetError`] enum that covers every
//! failure the conversion pipeline can hit. All of them are fatal: the run
//! stops at the first error and no output file is written.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatsheet operations.
///
/// # Example
///
/// ```rust
/// use chatsheet::error::Result;
/// use chatsheet::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatsheetError>;

/// The error type for all chatsheet operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsheetError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The first line of the export matched neither line pattern.
    ///
    /// Almost always means the export comes from an app version or locale
    /// whose layout this tool doesn't know, so both patterns are included
    /// to make the drift easy to spot.
    #[error(
        "Can't parse the first line: {line:?}, patterns are first-line={first_line_pattern:?} and full={full_pattern:?}"
    )]
    Format {
        /// The offending line, as read
        line: String,
        /// Pattern for `DATE TIME SEP NAME: BODY` lines
        full_pattern: &'static str,
        /// Pattern for `DATE TIME SEP BODY` lines
        first_line_pattern: &'static str,
    },

    /// UTF-8 encoding error.
    ///
    /// Occurs when the export file is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatsheetError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatsheetError::Utf8 {
            context: "input file".to_string(),
            source: err,
        }
    }
}

impl ChatsheetError {
    /// Creates a format error for an unparseable first line.
    pub fn format(line: impl Into<String>) -> Self {
        ChatsheetError::Format {
            line: line.into(),
            full_pattern: crate::parsing::FULL_PATTERN,
            first_line_pattern: crate::parsing::FIRST_LINE_PATTERN,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsheetError::Io(_))
    }

    /// Returns `true` if this is a format error.
    pub fn is_format(&self) -> bool {
        matches!(self, ChatsheetError::Format { .. })
    }

    /// Returns `true` if this is an encoding error.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ChatsheetError::Utf8 { .. })
    }
}
