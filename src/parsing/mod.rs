//! Line-level parsing utilities.
//!
//! - [`attachment`] - rewrites `<attached: FILE>` markers into HTML
//! - [`timestamp`] - day-first resolution of DATE and TIME strings
//! - [`line`] - recognizes lines that start a message

pub mod attachment;
pub mod line;
pub mod timestamp;

pub use attachment::{AttachmentKind, has_attachment, normalize_attachments};
pub use line::{FIRST_LINE_PATTERN, FULL_PATTERN, LineMatch, ParsedLine, parse_line};
pub use timestamp::{parse_date, parse_time, parse_timestamp};
