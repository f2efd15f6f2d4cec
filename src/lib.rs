//! # Chatsheet
//!
//! Turns a WhatsApp text export into a single static HTML page.
//!
//! ## Overview
//!
//! An export is a `.txt` file where every message starts with a timestamp
//! and a sender, and long messages continue on the following lines:
//!
//! ```text
//! [15.01.24, 10:30:45] Alice: Hello
//! [15.01.24, 10:31:02] Bob: Hi!
//! Long time no see
//! [15.01.24, 10:31:40] Bob: <attached: 00000012-PHOTO-2024-01-15.jpg>
//! ```
//!
//! Chatsheet reassembles those lines into [`Message`]s, rewrites attachment
//! markers into image/audio/video tags, groups consecutive messages from the
//! same sender, and renders the result as one self-contained HTML file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use chatsheet::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let input = Path::new("WhatsApp Chat with Alice.txt");
//!
//!     let messages = parse_file(input)?;
//!     let grouping = group_by_sender(messages);
//!     write_html(&grouping, input, Path::new("alice.html"), &Template::default())?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] — Line-level recognition
//!   - [`parse_line`](parsing::parse_line), [`parse_timestamp`](parsing::parse_timestamp),
//!     [`normalize_attachments`](parsing::normalize_attachments)
//! - [`parser`] — Reassembles lines into messages ([`parse_file`](parser::parse_file),
//!   [`parse_str`](parser::parse_str))
//! - [`core`] — Grouping and output
//!   - [`core::grouping`] — [`group_by_sender`](core::group_by_sender), [`Grouping`](core::Grouping)
//!   - [`core::output`] — [`write_html`](core::write_html), [`to_html`](core::to_html)
//! - [`config`] — [`Template`](config::Template) for the page look
//! - [`error`] — [`ChatsheetError`], [`Result`]
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatsheetError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatsheet::prelude::*;
/// ```
pub mod prelude {
    // Core message type
    pub use crate::Message;

    // Error types
    pub use crate::error::{ChatsheetError, Result};

    // Parsing
    pub use crate::parser::{parse_file, parse_str};
    pub use crate::parsing::{LineMatch, normalize_attachments, parse_line};

    // Grouping
    pub use crate::core::grouping::{GroupedRun, Grouping, GroupingStats, group_by_sender};

    // Output
    pub use crate::config::Template;
    pub use crate::core::output::{to_html, write_html};
    pub use crate::core::pipeline::convert;
}
