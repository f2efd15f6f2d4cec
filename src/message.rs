//! The message type produced by the export parser.
//!
//! A [`Message`] is one logical chat message: the timestamp and sender taken
//! from its first line, and a body that may span several physical lines.
//!
//! # Examples
//!
//! ```
//! use chatsheet::Message;
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2020, 2, 1, 10, 0, 0).unwrap();
//! let msg = Message::new(ts, "Alice", "Hello");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.body(), "Hello");
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatsheet::Message;
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2020, 2, 1, 10, 0, 0).unwrap();
//! let msg = Message::new(ts, "Alice", "Hello!");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: Message = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sender reported for lines that carry a timestamp but no `NAME:` part.
///
/// Older exports start with such a line (e.g. the encryption notice).
pub const NOBODY: &str = "nobody";

/// A single chat message reassembled from the export.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `DateTime<Utc>` | Wall-clock time from the export line |
/// | `sender` | `String` | Display name, or [`NOBODY`] |
/// | `body` | `String` | Text, may contain `\n` and attachment HTML |
///
/// Exports carry no time zone; the wall-clock value is stored as UTC
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent.
    pub timestamp: DateTime<Utc>,

    /// Display name of the author.
    pub sender: String,

    /// Message text.
    ///
    /// Continuation lines are joined with `\n`. Attachment markers have
    /// already been replaced by HTML tags.
    pub body: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        timestamp: DateTime<Utc>,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` if the message came from a line without a sender name.
    pub fn is_from_nobody(&self) -> bool {
        self.sender == NOBODY
    }

    /// Appends a continuation line to the body.
    ///
    /// Trailing whitespace of `line` is dropped; leading indentation is kept.
    pub fn push_line(&mut self, line: &str) {
        self.body.push('\n');
        self.body.push_str(line.trim_end());
    }

    /// Number of physical lines the body spans.
    pub fn line_count(&self) -> usize {
        self.body.split('\n').count()
    }
}
