//! Export parser: turns the lines of an export into [`Message`]s.
//!
//! A message starts on every line recognized by
//! [`parse_line`](crate::parsing::parse_line); any other line is appended to
//! the message in progress. The first line of the file must start a message,
//! otherwise the file isn't an export this crate understands and parsing
//! fails with [`ChatsheetError::Format`].
//!
//! # Example
//!
//! ```rust
//! use chatsheet::parser::parse_str;
//!
//! let messages = parse_str("1/2/20, 10:00 AM - Alice: Hello\nWorld")?;
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].sender, "Alice");
//! assert_eq!(messages[0].body, "Hello\nWorld");
//! # Ok::<(), chatsheet::ChatsheetError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::Message;
use crate::error::{ChatsheetError, Result};
use crate::parsing::{LineMatch, normalize_attachments, parse_line};

const BOM: char = '\u{feff}';

/// Reassembles messages from raw lines.
///
/// Lines are used as given; attachment markers are expected to be rewritten
/// already (see [`parse_str`]). Message order follows line order exactly,
/// even when timestamps go backwards.
///
/// # Errors
///
/// Returns [`ChatsheetError::Format`] if the first line doesn't start a
/// message.
pub fn reassemble<I, S>(lines: I) -> Result<Vec<Message>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut messages: Vec<Message> = Vec::new();
    let mut current: Option<Message> = None;
    let mut continuation_lines = 0usize;

    for line in lines {
        let line = line.as_ref();
        match parse_line(line) {
            LineMatch::Matched(parsed) => {
                // A new message starts, so the previous one is complete
                if let Some(done) = current.replace(parsed.into_message()) {
                    messages.push(done);
                }
            }
            LineMatch::NoMatch => match current.as_mut() {
                Some(msg) => {
                    msg.push_line(line);
                    continuation_lines += 1;
                }
                None => return Err(ChatsheetError::format(line)),
            },
        }
    }

    // The last message remains
    if let Some(done) = current {
        messages.push(done);
    }

    debug!(
        messages = messages.len(),
        continuation_lines, "reassembled messages"
    );
    Ok(messages)
}

/// Parses export text that is already in memory.
///
/// A leading byte order mark is ignored. Attachment markers are rewritten on
/// every line before reassembly.
pub fn parse_str(content: &str) -> Result<Vec<Message>> {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    reassemble(content.lines().map(normalize_attachments))
}

/// Reads an export file as UTF-8 text, without its byte order mark.
pub fn read_export(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let mut text = String::from_utf8(bytes).map_err(|source| ChatsheetError::Utf8 {
        context: path.display().to_string(),
        source,
    })?;
    if text.starts_with(BOM) {
        text.replace_range(..BOM.len_utf8(), "");
    }
    Ok(text)
}

/// Reads and parses an export file.
///
/// # Example
///
/// ```rust,no_run
/// use chatsheet::parser::parse_file;
///
/// let messages = parse_file("WhatsApp Chat with Alice.txt".as_ref())?;
/// # Ok::<(), chatsheet::ChatsheetError>(())
/// ```
pub fn parse_file(path: &Path) -> Result<Vec<Message>> {
    let content = read_export(path)?;
    parse_str(&content)
}
