//! Single-line recognition.
//!
//! Every message in an export starts on a line of the form
//!
//! ```text
//! [1/15/24, 10:30:45 AM] Alice: Hello
//! 15/01/2024, 10:30 - Alice: Hello
//! ```
//!
//! Lines that don't match are continuation lines of the previous message.
//! Some exports open with a line that has a timestamp but no `NAME:` part;
//! those are reported with the sender [`NOBODY`](crate::message::NOBODY).

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::{Captures, Regex};
use tracing::debug;

use super::attachment::normalize_attachments;
use super::timestamp::parse_timestamp;
use crate::Message;
use crate::message::NOBODY;

/// `DATE, TIME SEP NAME: BODY`
pub const FULL_PATTERN: &str = r"^\[?(?P<date>[\d/\-.]+),? (?P<time>[\d:]+(?:[ \x{202F}][AP]M)?)\]?(?: - |: | )(?P<name>[^:]+?): (?P<body>.*)$";

/// `DATE, TIME SEP BODY`, used when [`FULL_PATTERN`] doesn't match.
pub const FIRST_LINE_PATTERN: &str = r"^\[?(?P<date>[\d/\-.]+),? (?P<time>[\d:]+(?:[ \x{202F}][AP]M)?)\]?(?: - |: | )(?P<body>.*)$";

static FULL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(FULL_PATTERN).unwrap());
static FIRST_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FIRST_LINE_PATTERN).unwrap());

/// The pieces of a line that starts a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub timestamp: DateTime<Utc>,
    pub sender: &'a str,
    pub body: Cow<'a, str>,
}

impl ParsedLine<'_> {
    /// Turns the line into the first line of a [`Message`].
    pub fn into_message(self) -> Message {
        Message::new(self.timestamp, self.sender, self.body)
    }
}

/// Outcome of [`parse_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch<'a> {
    /// The line starts a new message.
    Matched(ParsedLine<'a>),
    /// The line continues the previous message.
    NoMatch,
}

impl<'a> LineMatch<'a> {
    /// Returns `true` if the line starts a new message.
    pub fn is_match(&self) -> bool {
        matches!(self, LineMatch::Matched(_))
    }

    /// Converts into an `Option`, dropping the `NoMatch` case.
    pub fn matched(self) -> Option<ParsedLine<'a>> {
        match self {
            LineMatch::Matched(parsed) => Some(parsed),
            LineMatch::NoMatch => None,
        }
    }
}

fn extract<'a>(line: &'a str, caps: &Captures<'a>, sender: &'a str) -> LineMatch<'a> {
    let date = caps.name("date").map_or("", |m| m.as_str());
    let time = caps.name("time").map_or("", |m| m.as_str());
    let body = caps.name("body").map_or("", |m| m.as_str());

    let Some(timestamp) = parse_timestamp(date, time) else {
        debug!(line, date, time, "timestamp out of range, treating as continuation");
        return LineMatch::NoMatch;
    };

    LineMatch::Matched(ParsedLine {
        timestamp,
        sender,
        body: normalize_attachments(body),
    })
}

/// Parses one line of an export.
///
/// Tries [`FULL_PATTERN`] first, then [`FIRST_LINE_PATTERN`]. A line whose
/// date or time doesn't resolve to a real timestamp is a `NoMatch`. This
/// function never fails; deciding whether an unmatched line is an error is
/// up to the caller.
///
/// # Example
///
/// ```rust
/// use chatsheet::parsing::{parse_line, LineMatch};
///
/// let LineMatch::Matched(parsed) = parse_line("1/2/20, 10:00 AM - Alice: Hello") else {
///     panic!("expected a match");
/// };
/// assert_eq!(parsed.sender, "Alice");
/// assert_eq!(parsed.body, "Hello");
///
/// assert_eq!(parse_line("just some text"), LineMatch::NoMatch);
/// ```
pub fn parse_line(line: &str) -> LineMatch<'_> {
    if let Some(caps) = FULL_REGEX.captures(line) {
        let sender = caps.name("name").map_or("", |m| m.as_str());
        return extract(line, &caps, sender);
    }

    // Maybe it's a first line, which carries no sender name
    if let Some(caps) = FIRST_LINE_REGEX.captures(line) {
        return extract(line, &caps, NOBODY);
    }

    LineMatch::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn matched(line: &str) -> ParsedLine<'_> {
        parse_line(line)
            .matched()
            .unwrap_or_else(|| panic!("expected match for {line:?}"))
    }

    #[test]
    fn test_android_dash_separator() {
        let parsed = matched("1/2/20, 10:00 AM - Alice: Hello");
        assert_eq!(parsed.sender, "Alice");
        assert_eq!(parsed.body, "Hello");
        assert_eq!(
            parsed.timestamp,
            Utc.with_ymd_and_hms(2020, 2, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_ios_bracketed() {
        let parsed = matched("[15.01.24, 10:30:45] Bob: Hi there");
        assert_eq!(parsed.sender, "Bob");
        assert_eq!(parsed.body, "Hi there");
        assert_eq!(
            parsed.timestamp,
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 45).unwrap()
        );
    }

    #[test]
    fn test_colon_separator_without_comma() {
        let parsed = matched("15/01/2024 10:30: Alice: Hello");
        assert_eq!(parsed.sender, "Alice");
        assert_eq!(parsed.body, "Hello");
    }

    #[test]
    fn test_narrow_nbsp_before_meridiem() {
        let parsed = matched("[1/15/24, 9:05:00\u{202F}PM] Alice: Evening");
        assert_eq!(
            parsed.timestamp,
            Utc.with_ymd_and_hms(2024, 1, 15, 21, 5, 0).unwrap()
        );
    }

    #[test]
    fn test_name_is_shortest_match() {
        let parsed = matched("1/2/20, 10:00 - Alice: note: remember this");
        assert_eq!(parsed.sender, "Alice");
        assert_eq!(parsed.body, "note: remember this");
    }

    #[test]
    fn test_name_with_spaces_and_unicode() {
        let parsed = matched("26.10.2025, 20:40 - Мария Иванова: Добрый вечер");
        assert_eq!(parsed.sender, "Мария Иванова");
        assert_eq!(parsed.body, "Добрый вечер");
    }

    #[test]
    fn test_first_line_without_sender() {
        let parsed = matched(
            "1/2/20, 10:00 AM - Messages and calls are end-to-end encrypted. Tap to learn more.",
        );
        assert_eq!(parsed.sender, NOBODY);
        assert_eq!(
            parsed.body,
            "Messages and calls are end-to-end encrypted. Tap to learn more."
        );
    }

    #[test]
    fn test_empty_body() {
        let parsed = matched("1/2/20, 10:00 - Alice: ");
        assert_eq!(parsed.sender, "Alice");
        assert_eq!(parsed.body, "");
    }

    #[test]
    fn test_attachment_in_body_is_normalized() {
        let parsed = matched("1/2/20, 10:00 - Bob: <attached: photo.jpg>");
        assert!(parsed.body.contains(r#"<a target="_blank" href="photo.jpg"><img"#));
    }

    #[test]
    fn test_continuation_lines() {
        assert_eq!(parse_line("World"), LineMatch::NoMatch);
        assert_eq!(parse_line(""), LineMatch::NoMatch);
        assert_eq!(parse_line("random unparseable text"), LineMatch::NoMatch);
        assert_eq!(parse_line("10:00 Alice: hi"), LineMatch::NoMatch);
        assert_eq!(parse_line(" 1/2/20, 10:00 - Alice: hi"), LineMatch::NoMatch);
    }

    #[test]
    fn test_invalid_date_is_continuation() {
        assert_eq!(parse_line("99/99/99, 10:00 - Alice: hi"), LineMatch::NoMatch);
        assert_eq!(parse_line("1/2/20, 77:00 - Alice: hi"), LineMatch::NoMatch);
    }

    #[test]
    fn test_into_message() {
        let msg = matched("1/2/20, 10:00 - Alice: Hello").into_message();
        assert_eq!(msg.sender(), "Alice");
        assert_eq!(msg.body(), "Hello");
    }

    #[test]
    fn test_patterns_compile() {
        assert!(Regex::new(FULL_PATTERN).is_ok());
        assert!(Regex::new(FIRST_LINE_PATTERN).is_ok());
    }
}
