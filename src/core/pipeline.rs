//! The whole conversion in one call.

use std::path::Path;

use tracing::info;

use super::grouping::{GroupingStats, group_by_sender};
use super::output::write_html;
use crate::config::Template;
use crate::error::Result;
use crate::parser::parse_file;

/// Full pipeline: parse the export, group it, write the page.
///
/// Nothing is written when parsing fails.
pub fn convert(input: &Path, output: &Path, template: &Template) -> Result<GroupingStats> {
    let messages = parse_file(input)?;
    let grouping = group_by_sender(messages);
    let stats = grouping.stats();

    write_html(&grouping, input, output, template)?;
    info!(
        messages = stats.message_count,
        runs = stats.run_count,
        senders = stats.sender_count,
        output = %output.display(),
        "wrote chat page"
    );

    Ok(stats)
}
