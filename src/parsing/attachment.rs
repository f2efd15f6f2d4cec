//! Attachment marker rewriting.
//!
//! iOS exports reference media with an inline marker such as
//! `<attached: 00000012-PHOTO-2020-01-01-10-00-00.jpg>`. The exported files
//! sit next to the `.txt`, so the marker is replaced by an HTML tag pointing
//! at the file by relative path.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Matches one `<attached: FILENAME>` marker. The filename cannot contain
/// `<` or `>`, which keeps the rewrite idempotent.
static ATTACHMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<attached: ([^<>]+)>").unwrap());

/// How an attachment is shown in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    /// `jpg`, `jpeg`, `png`: thumbnail linking to the full image
    Image,
    /// `opus`: voice note player
    Audio,
    /// `mp4`: video player
    Video,
    /// Anything else: plain link
    Other,
}

impl AttachmentKind {
    /// Classifies a file by the text after its last `.` (case-sensitive).
    ///
    /// A name without a dot is treated as its own extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatsheet::parsing::AttachmentKind;
    ///
    /// assert_eq!(AttachmentKind::from_filename("photo.jpg"), AttachmentKind::Image);
    /// assert_eq!(AttachmentKind::from_filename("photo.JPG"), AttachmentKind::Other);
    /// ```
    pub fn from_filename(filename: &str) -> Self {
        let ext = filename.rsplit('.').next().unwrap_or(filename);
        match ext {
            "jpg" | "png" | "jpeg" => AttachmentKind::Image,
            "opus" => AttachmentKind::Audio,
            "mp4" => AttachmentKind::Video,
            _ => AttachmentKind::Other,
        }
    }

    /// Renders the HTML replacing the marker for `file`.
    pub fn to_html(self, file: &str) -> String {
        match self {
            AttachmentKind::Image => format!(
                r#"<a target="_blank" href="{file}"><img width="128" height="128" src="{file}" /></a><br>"#
            ),
            AttachmentKind::Audio => format!(r#"<audio controls src="{file}"></audio><br>"#),
            AttachmentKind::Video => format!(r#"<video controls src="{file}"></video><br>"#),
            AttachmentKind::Other => format!(r#"<a target="_blank" href="{file}">{file}</a>"#),
        }
    }
}

/// Replaces every attachment marker in `body` with its HTML rendering.
///
/// Returns the input borrowed when there is no marker.
///
/// # Example
///
/// ```rust
/// use chatsheet::parsing::normalize_attachments;
///
/// let html = normalize_attachments("look <attached: cat.png>");
/// assert!(html.contains(r#"<img width="128" height="128" src="cat.png" />"#));
///
/// assert_eq!(normalize_attachments("no media here"), "no media here");
/// ```
pub fn normalize_attachments(body: &str) -> Cow<'_, str> {
    ATTACHMENT_REGEX.replace_all(body, |caps: &Captures<'_>| {
        let file = &caps[1];
        AttachmentKind::from_filename(file).to_html(file)
    })
}

/// Returns `true` if `body` still contains an attachment marker.
pub fn has_attachment(body: &str) -> bool {
    ATTACHMENT_REGEX.is_match(body)
}
