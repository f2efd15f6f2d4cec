//! HTML output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::config::Template;
use crate::core::grouping::{GroupedRun, Grouping};
use crate::error::Result;

/// Timestamp shown in each run header.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// File name shown in the page title and heading.
fn display_name(input_path: &Path) -> String {
    input_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_path.display().to_string())
}

fn push_run(html: &mut String, run: &GroupedRun, class: Option<&str>) {
    match class {
        Some(class) => html.push_str(&format!("<div class=\"chatbox {class}\">\n")),
        None => html.push_str("<div class=\"chatbox\">\n"),
    }
    html.push_str("<div class=\"user\">\n");
    html.push_str(&format!(
        "<span class=\"username\" style=\"margin-left: 15px\">{}</span>\n",
        run.sender
    ));
    html.push_str(&format!(
        "<span class=\"date\" style=\"margin-left: 15px\">{}</span>\n",
        run.first().timestamp.format(DATE_FORMAT)
    ));
    for msg in &run.messages {
        html.push_str(&format!("<div class=\"message\">{}</div><br>\n", msg.body));
    }
    html.push_str("</div>\n</div>\n");
}

/// Renders grouped messages as a standalone HTML page.
///
/// One `.chatbox` block per run, classed by the sender's display index
/// through [`Template::style_class`]. Sender names and bodies are inserted
/// as-is: bodies already carry attachment markup, and plain-text HTML in
/// messages is rendered rather than escaped.
pub fn to_html(grouping: &Grouping, input_path: &Path, template: &Template) -> String {
    let name = display_name(input_path);
    let mut html = String::with_capacity(
        template.stylesheet.len() + grouping.message_count() * 128 + 512,
    );

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str(&format!("<title>{}{}</title>\n", template.title_prefix, name));
    html.push_str("<meta charset=\"utf-8\"/>\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str("<style>\n");
    html.push_str(&template.stylesheet);
    html.push_str("\n</style>\n</head>\n<body>\n");
    html.push_str(&format!("<h1>{name}</h1>\n"));
    html.push_str("<div class=\"container\">\n");

    for run in &grouping.runs {
        let class = template.style_class(grouping.index_of(run));
        push_run(&mut html, run, class.as_deref());
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

/// Renders grouped messages and writes the page to `output_path`.
///
/// The page is rendered completely before the file is created.
pub fn write_html(
    grouping: &Grouping,
    input_path: &Path,
    output_path: &Path,
    template: &Template,
) -> Result<()> {
    let html = to_html(grouping, input_path, template);
    let mut file = File::create(output_path)?;
    file.write_all(html.as_bytes())?;
    file.flush()?;
    Ok(())
}
