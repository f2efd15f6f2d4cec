//! Core processing logic for chatsheet.
//!
//! This module contains:
//! - [`grouping`] - Runs of consecutive messages and sender indices
//! - [`output`] - The HTML page writer
//! - [`pipeline`] - Parse, group and write in one call
//!
//! # Quick Start
//!
//! ```rust
//! use chatsheet::core::{Grouping, group_by_sender, to_html, write_html};
//! ```

pub mod grouping;
pub mod output;
pub mod pipeline;

// Re-export main types for convenience
pub use grouping::{GroupedRun, Grouping, GroupingStats, SenderIndex, group_by_sender};
pub use output::{to_html, write_html};
pub use pipeline::convert;

// Re-export Message from the crate root
pub use crate::Message;
