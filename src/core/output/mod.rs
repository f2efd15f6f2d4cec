//! Output writers.
//!
//! - [`write_html`] / [`to_html`] - standalone HTML page, one bubble per run
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatsheet::Result<()> {
//! use std::path::Path;
//!
//! use chatsheet::config::Template;
//! use chatsheet::core::group_by_sender;
//! use chatsheet::core::output::{to_html, write_html};
//! use chatsheet::parser::parse_str;
//!
//! let input = Path::new("chat.txt");
//! let grouping = group_by_sender(parse_str("1/2/20, 10:00 - Alice: Hi")?);
//!
//! // Write to a file
//! write_html(&grouping, input, Path::new("chat.html"), &Template::default())?;
//!
//! // Or get the page as a string
//! let page = to_html(&grouping, input, &Template::default());
//! # Ok(())
//! # }
//! ```

mod html_writer;

pub use html_writer::{to_html, write_html};
